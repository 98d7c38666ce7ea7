//! In-memory warehouse for tests

use async_trait::async_trait;
use hd_db::{DbError, DbResult, Warehouse};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct FakeWarehouse {
    databases: Vec<String>,
    tables: HashMap<String, Vec<String>>,
    ddl: HashMap<String, String>,
    partitions: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

fn key(database: &str, table: &str) -> String {
    format!("{database}.{table}")
}

impl FakeWarehouse {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn table(mut self, database: &str, table: &str, ddl: &str) -> Self {
        if !self.databases.iter().any(|d| d == database) {
            self.databases.push(database.to_string());
        }
        self.tables
            .entry(database.to_string())
            .or_default()
            .push(table.to_string());
        self.ddl.insert(key(database, table), ddl.to_string());
        self
    }

    pub(crate) fn empty_database(mut self, database: &str) -> Self {
        self.databases.push(database.to_string());
        self.tables.insert(database.to_string(), Vec::new());
        self
    }

    pub(crate) fn partitions(mut self, database: &str, table: &str, rows: &[&str]) -> Self {
        self.partitions.insert(
            key(database, table),
            rows.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    /// Make one call fail, e.g. `fail("ddl:db.t")`, `fail("tables:db")`,
    /// `fail("partitions:db.t")` or `fail("databases")`.
    pub(crate) fn fail(mut self, call: &str) -> Self {
        self.failing.insert(call.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> DbResult<()> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.contains(&call) {
            return Err(DbError::QueryFailed {
                query: call,
                code: 1,
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Warehouse for FakeWarehouse {
    async fn list_databases(&self) -> DbResult<Vec<String>> {
        self.record("databases".to_string())?;
        Ok(self.databases.clone())
    }

    async fn list_tables(&self, database: &str) -> DbResult<Vec<String>> {
        self.record(format!("tables:{database}"))?;
        self.tables
            .get(database)
            .cloned()
            .ok_or_else(|| DbError::NotFound(database.to_string()))
    }

    async fn fetch_create_statement(&self, database: &str, table: &str) -> DbResult<String> {
        self.record(format!("ddl:{}", key(database, table)))?;
        self.ddl
            .get(&key(database, table))
            .cloned()
            .ok_or_else(|| DbError::NotFound(key(database, table)))
    }

    async fn list_partitions(&self, database: &str, table: &str) -> DbResult<Vec<String>> {
        self.record(format!("partitions:{}", key(database, table)))?;
        Ok(self
            .partitions
            .get(&key(database, table))
            .cloned()
            .unwrap_or_default())
    }

    fn backend_name(&self) -> &'static str {
        "fake"
    }
}
