//! Error types for hd-dump

use hd_core::CoreError;
use hd_db::DbError;
use thiserror::Error;

/// Errors that abort a dump
#[derive(Error, Debug)]
pub enum DumpError {
    /// Database listing failed; nothing to dump
    #[error("[P001] Failed to list databases: {0}")]
    ListDatabases(#[source] DbError),

    /// Strict mode rejected a statement
    #[error("[P002] Dump of '{database}' aborted: {source}")]
    Rejected {
        database: String,
        source: CoreError,
    },
}

/// Result type alias for DumpError
pub type DumpResult<T> = Result<T, DumpError>;
