//! Error types for hd-core

use thiserror::Error;

/// Core error type for hivedump
#[derive(Error, Debug)]
pub enum CoreError {
    /// H001: Configuration file not found
    #[error("[H001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// H002: Invalid configuration value
    #[error("[H002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// H003: Failed to parse configuration file
    #[error("[H003] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// H004: IO error with file path context
    #[error("[H004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// H005: A CREATE statement matched none of the recognized headers (strict mode)
    #[error("[H005] Unrecognized CREATE statement: {statement}")]
    UnrecognizedCreate { statement: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
