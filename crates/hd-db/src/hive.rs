//! Query tool backend
//!
//! Runs the warehouse command-line tool once per request in silent mode
//! (`<command> <args..> -S -e "<query>"`) and parses its stdout.

use crate::error::{DbError, DbResult};
use crate::traits::Warehouse;
use async_trait::async_trait;
use hd_core::config::HiveConfig;
use hd_core::sql_utils::quote_ident;
use tokio::process::Command;

/// Warehouse backend that shells out to the query tool.
#[derive(Debug, Clone)]
pub struct HiveCliBackend {
    command: String,
    args: Vec<String>,
}

impl HiveCliBackend {
    /// Create a backend for the given executable
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Create a backend from the `hive` section of the config
    pub fn from_config(config: &HiveConfig) -> Self {
        Self::new(config.command.clone()).with_args(config.args.clone())
    }

    /// Extra arguments placed before `-S -e <query>`
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Build the process invocation for one query
    pub(crate) fn query_command(&self, query: &str) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args).arg("-S").arg("-e").arg(query);
        cmd.kill_on_drop(true);
        cmd
    }

    /// Run one query and return its stdout.
    pub async fn run(&self, query: &str) -> DbResult<String> {
        log::debug!("{} -S -e {:?}", self.command, query);
        let output = self
            .query_command(query)
            .output()
            .await
            .map_err(|e| DbError::SpawnFailed {
                command: self.command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(
                query,
                output.status.code().unwrap_or(-1),
                stderr,
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Turn a failed invocation into a `DbError`.
///
/// The tool reports missing objects only through its message text, so
/// classification matches on the known phrases.
pub(crate) fn classify_failure(query: &str, code: i32, stderr: String) -> DbError {
    if stderr.contains("Table not found")
        || stderr.contains("Database does not exist")
        || stderr.contains("Invalid table alias or column reference")
    {
        DbError::NotFound(stderr)
    } else {
        DbError::QueryFailed {
            query: query.to_string(),
            code,
            stderr,
        }
    }
}

/// Parse a one-name-per-line listing, dropping blank lines and the
/// logging noise some tool versions print on stdout.
pub fn parse_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_tool_noise(line))
        .map(String::from)
        .collect()
}

fn is_tool_noise(line: &str) -> bool {
    line.starts_with("WARN")
        || line.starts_with("SLF4J")
        || line.starts_with("Time taken")
        || line == "OK"
}

/// Keep `SHOW CREATE TABLE` output intact apart from tool noise lines.
pub fn clean_create_output(output: &str) -> String {
    let mut out = String::with_capacity(output.len());
    for line in output.split_inclusive('\n') {
        if !is_tool_noise(line.trim()) {
            out.push_str(line);
        }
    }
    out
}

fn qualified(database: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(database), quote_ident(table))
}

#[async_trait]
impl Warehouse for HiveCliBackend {
    async fn list_databases(&self) -> DbResult<Vec<String>> {
        Ok(parse_listing(&self.run("SHOW DATABASES;").await?))
    }

    async fn list_tables(&self, database: &str) -> DbResult<Vec<String>> {
        let query = format!("SHOW TABLES IN {};", quote_ident(database));
        Ok(parse_listing(&self.run(&query).await?))
    }

    async fn fetch_create_statement(&self, database: &str, table: &str) -> DbResult<String> {
        let query = format!("SHOW CREATE TABLE {};", qualified(database, table));
        Ok(clean_create_output(&self.run(&query).await?))
    }

    async fn list_partitions(&self, database: &str, table: &str) -> DbResult<Vec<String>> {
        let query = format!("SHOW PARTITIONS {};", qualified(database, table));
        Ok(parse_listing(&self.run(&query).await?))
    }

    fn backend_name(&self) -> &'static str {
        "hive-cli"
    }
}

#[cfg(test)]
#[path = "hive_test.rs"]
mod tests;
