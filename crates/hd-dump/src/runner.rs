//! Database dump orchestration

use crate::enrich::enrich_partitions;
use crate::error::{DumpError, DumpResult};
use crate::report::{DatabaseDump, FetchFailure, FetchStage};
use futures::stream::{self, StreamExt};
use hd_core::pipeline::{check_strict, render_script, terminate_statement, transform_ddl};
use hd_core::DumpOptions;
use hd_db::Warehouse;

/// Settings for one dump run
#[derive(Debug, Clone)]
pub struct DumpSettings {
    /// Pipeline options
    pub options: DumpOptions,

    /// Maximum concurrent fetches per database
    pub jobs: usize,

    /// Abort a database on unrecognized `CREATE` statements
    pub strict: bool,

    /// Restrict the dump to these tables
    pub tables: Option<Vec<String>>,
}

impl Default for DumpSettings {
    fn default() -> Self {
        Self {
            options: DumpOptions::default(),
            jobs: 1,
            strict: false,
            tables: None,
        }
    }
}

/// Dump runner driving a warehouse
pub struct DumpRunner<'a> {
    warehouse: &'a dyn Warehouse,
    settings: &'a DumpSettings,
}

impl<'a> DumpRunner<'a> {
    /// Create a new dump runner
    pub fn new(warehouse: &'a dyn Warehouse, settings: &'a DumpSettings) -> Self {
        Self {
            warehouse,
            settings,
        }
    }

    /// Databases to dump: the requested ones, or every database when
    /// `all` is set.
    pub async fn resolve_databases(
        &self,
        requested: &[String],
        all: bool,
    ) -> DumpResult<Vec<String>> {
        if !all {
            return Ok(requested.to_vec());
        }
        self.warehouse
            .list_databases()
            .await
            .map_err(DumpError::ListDatabases)
    }

    /// Dump one database.
    ///
    /// Fetch failures degrade to empty output and are listed in the
    /// returned dump; only strict-mode rejection is an error.
    pub async fn dump_database(&self, database: &str) -> DumpResult<DatabaseDump> {
        let mut failures = Vec::new();

        let listed = self.list_tables(database, &mut failures).await;
        let (tables, ddl) = self.fetch_ddl(database, &listed, &mut failures).await;

        let mut body = transform_ddl(&ddl, &self.settings.options);
        if self.settings.strict {
            check_strict(&body).map_err(|source| DumpError::Rejected {
                database: database.to_string(),
                source,
            })?;
        }

        let partition_statements = if self.settings.options.suppress_partition_info {
            Vec::new()
        } else {
            enrich_partitions(
                self.warehouse,
                database,
                &body,
                self.settings.jobs,
                &mut failures,
            )
            .await
        };
        if !partition_statements.is_empty() {
            body.push('\n');
            for statement in &partition_statements {
                body.push_str(statement);
                body.push('\n');
            }
        }

        Ok(DatabaseDump {
            database: database.to_string(),
            script: render_script(database, &body),
            tables,
            partition_statements: partition_statements.len(),
            failures,
        })
    }

    /// Dump several databases in order
    pub async fn dump_all(&self, databases: &[String]) -> DumpResult<Vec<DatabaseDump>> {
        let mut dumps = Vec::with_capacity(databases.len());
        for database in databases {
            dumps.push(self.dump_database(database).await?);
        }
        Ok(dumps)
    }

    /// Table names to dump, in warehouse order
    async fn list_tables(
        &self,
        database: &str,
        failures: &mut Vec<FetchFailure>,
    ) -> Vec<String> {
        let tables = match self.warehouse.list_tables(database).await {
            Ok(tables) => tables,
            Err(e) => {
                log::warn!("Table listing failed for {}: {}", database, e);
                failures.push(FetchFailure::new(database, None, FetchStage::ListTables, &e));
                return Vec::new();
            }
        };

        match &self.settings.tables {
            Some(wanted) => {
                for name in wanted {
                    if !tables.contains(name) {
                        log::warn!("Table {} not found in {}", name, database);
                    }
                }
                tables.into_iter().filter(|t| wanted.contains(t)).collect()
            }
            None => tables,
        }
    }

    /// Tables whose DDL was fetched, and their concatenated, terminated
    /// DDL in table order
    async fn fetch_ddl(
        &self,
        database: &str,
        tables: &[String],
        failures: &mut Vec<FetchFailure>,
    ) -> (Vec<String>, String) {
        let fetched: Vec<_> = stream::iter(tables)
            .map(|table| async move {
                log::debug!("Fetching DDL for {}.{}", database, table);
                (
                    table,
                    self.warehouse.fetch_create_statement(database, table).await,
                )
            })
            .buffered(self.settings.jobs.max(1))
            .collect()
            .await;

        let mut dumped = Vec::with_capacity(fetched.len());
        let mut ddl = String::new();
        for (table, result) in fetched {
            match result {
                Ok(statement) => {
                    ddl.push_str(&terminate_statement(&statement));
                    dumped.push(table.clone());
                }
                Err(e) => {
                    log::warn!("DDL fetch failed for {}.{}: {}", database, table, e);
                    failures.push(FetchFailure::new(
                        database,
                        Some(table.as_str()),
                        FetchStage::CreateStatement,
                        &e,
                    ));
                }
            }
        }
        (dumped, ddl)
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
