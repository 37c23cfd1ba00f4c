//! CLI-level errors (wraps application and domain errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(_) => crate::exitcode::DATASET,
            CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::Output(_) => crate::exitcode::IOERR,
        }
    }
}
