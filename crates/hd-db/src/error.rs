//! Error types for hd-db

use thiserror::Error;

/// Warehouse collaborator errors
#[derive(Error, Debug)]
pub enum DbError {
    /// The query tool could not be started (D001)
    #[error("[D001] Failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// The query tool exited with a failure status (D002)
    #[error("[D002] Query failed (exit code {code}): {query}: {stderr}")]
    QueryFailed {
        query: String,
        code: i32,
        stderr: String,
    },

    /// The object does not exist in the warehouse (D003)
    #[error("[D003] Table or database not found: {0}")]
    NotFound(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
