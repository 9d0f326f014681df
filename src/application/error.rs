//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{ConfigError, DomainError};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("settings error: {message}")]
    Settings { message: String },
}

impl From<ConfigError> for ApplicationError {
    fn from(e: ConfigError) -> Self {
        ApplicationError::Domain(DomainError::Config(e))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
