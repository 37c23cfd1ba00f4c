//! Application-level errors: dataset resolution, reading and parsing

use std::path::PathBuf;
use thiserror::Error;

/// Application errors all abort a run before any filtering happens.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// No usable dataset: bad `--data`, bad `MASVS_JSON`, or nothing bundled.
    #[error("{0}")]
    FileNotFound(String),

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON with the wrong shape.
    #[error("{0}")]
    Schema(String),

    #[error("config error: {message}")]
    Config { message: String },

    /// Reading an existing dataset failed (permissions, invalid UTF-8, ...).
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
