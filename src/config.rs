//! Process-wide defaults for brew arguments
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (1:15, three 60% pours, even 40% split)
//! 2. Environment variables: `FOURSIX_*` prefix
//! 3. Command-line flags (applied by the brew service)
//!
//! No configuration files are read.

use std::str::FromStr;

use config::{Config, ConfigError as SourceError, Environment};
use rust_decimal::Decimal;
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{DEFAULT_POURS60, DEFAULT_RATIO, DEFAULT_RATIO40};

/// Environment variable prefix, e.g. `FOURSIX_RATIO=16`.
pub const ENV_PREFIX: &str = "FOURSIX";

/// Defaults used when a flag is not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Coffee-to-water ratio denominator (default: 15)
    pub ratio: u32,
    /// Pour count of the 60% stage (default: 3)
    pub pours60: u8,
    /// Share of the 40% stage for pour #1 (default: 0.5)
    pub ratio40: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            pours60: DEFAULT_POURS60,
            ratio40: DEFAULT_RATIO40,
        }
    }
}

impl Settings {
    /// Load settings: compiled defaults overridden by `FOURSIX_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings from an explicit environment source.
    ///
    /// Values are only range-checked later, by the resolvers that consume them.
    pub fn load_from(env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        let mut settings = Self::default();
        if let Some(val) = optional(config.get::<u32>("ratio"))? {
            settings.ratio = val;
        }
        if let Some(val) = optional(config.get::<u8>("pours60"))? {
            settings.pours60 = val;
        }
        if let Some(val) = optional(config.get_string("ratio40"))? {
            settings.ratio40 = Decimal::from_str(val.trim()).map_err(|e| {
                ApplicationError::Settings {
                    message: format!("{}_RATIO40={:?}: {}", ENV_PREFIX, val, e),
                }
            })?;
        }
        debug!("settings: {:?}", settings);

        Ok(settings)
    }
}

/// Missing keys are not an error; malformed values are.
fn optional<T>(result: Result<T, SourceError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(SourceError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: SourceError) -> ApplicationError {
    ApplicationError::Settings {
        message: e.to_string(),
    }
}
