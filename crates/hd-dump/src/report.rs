//! Dump results and fetch failure reporting

use hd_db::DbError;
use std::fmt;

/// Which collaborator call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    ListTables,
    CreateStatement,
    Partitions,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStage::ListTables => write!(f, "table listing"),
            FetchStage::CreateStatement => write!(f, "create statement"),
            FetchStage::Partitions => write!(f, "partition listing"),
        }
    }
}

/// A collaborator call that failed and was replaced by empty output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub database: String,

    /// `None` when the table listing itself failed
    pub table: Option<String>,

    pub stage: FetchStage,

    pub message: String,
}

impl FetchFailure {
    pub fn new(database: &str, table: Option<&str>, stage: FetchStage, error: &DbError) -> Self {
        Self {
            database: database.to_string(),
            table: table.map(String::from),
            stage,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(
                f,
                "{} failed for {}.{}: {}",
                self.stage, self.database, table, self.message
            ),
            None => write!(f, "{} failed for {}: {}", self.stage, self.database, self.message),
        }
    }
}

/// The dump of one database
#[derive(Debug, Clone)]
pub struct DatabaseDump {
    /// Database name
    pub database: String,

    /// Tables whose DDL made it into the script, in warehouse order
    pub tables: Vec<String>,

    /// Final replayable script, starting with `use <db>;`
    pub script: String,

    /// Number of `ADD PARTITION` statements appended
    pub partition_statements: usize,

    /// Fetches that degraded to empty output
    pub failures: Vec<FetchFailure>,
}

/// Summary over a dump run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub databases: usize,
    pub tables: usize,
    pub partition_statements: usize,
    pub failures: usize,
}

impl DumpSummary {
    /// Create a summary from database dumps
    pub fn from_dumps(dumps: &[DatabaseDump]) -> Self {
        Self {
            databases: dumps.len(),
            tables: dumps.iter().map(|d| d.tables.len()).sum(),
            partition_statements: dumps.iter().map(|d| d.partition_statements).sum(),
            failures: dumps.iter().map(|d| d.failures.len()).sum(),
        }
    }

    /// True when no fetch degraded
    pub fn is_complete(&self) -> bool {
        self.failures == 0
    }
}
