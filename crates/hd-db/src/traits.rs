//! Warehouse trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// The external collaborator the dump pipeline calls out to.
///
/// Each method is one request/response round-trip to the warehouse.
/// Implementations must be Send + Sync so fetches can run concurrently.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// List database names
    async fn list_databases(&self) -> DbResult<Vec<String>>;

    /// List table names of `database`, in warehouse order
    async fn list_tables(&self, database: &str) -> DbResult<Vec<String>>;

    /// Raw `SHOW CREATE TABLE` output for one table
    async fn fetch_create_statement(&self, database: &str, table: &str) -> DbResult<String>;

    /// Raw partition listing rows for one table (e.g. `ds=2020-01-01/hr=00`)
    async fn list_partitions(&self, database: &str, table: &str) -> DbResult<Vec<String>>;

    /// Backend identifier for logging
    fn backend_name(&self) -> &'static str;
}
