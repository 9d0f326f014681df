//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("output failed: {0}")]
    Output(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::Config(_)) => crate::exitcode::USAGE,
                ApplicationError::Domain(DomainError::Unimplemented(_)) => {
                    crate::exitcode::SOFTWARE
                }
                ApplicationError::Settings { .. } => crate::exitcode::CONFIG,
            },
            CliError::Output(_) => crate::exitcode::IOERR,
        }
    }
}
