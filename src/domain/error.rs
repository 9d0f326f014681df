//! Domain-level errors (no external dependencies)

use rust_decimal::Decimal;
use thiserror::Error;

/// Violations of a user-input constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("amount required: set --coffee-g or --water-g")]
    AmountRequired,

    #[error("ambiguous amount, need override: both --coffee-g and --water-g are set")]
    AmbiguousAmount,

    #[error("invalid amount: {field} must be greater than 0, got {value}g")]
    InvalidAmount { field: &'static str, value: Decimal },

    #[error("invalid ratio: 1:{0} (denominator must be at least 1)")]
    InvalidRatio(u32),

    #[error("invalid pours60: {0} (must be between 1 and 3)")]
    InvalidPours60(u8),

    #[error("ambiguous ratio40: --ratio40 and --ratio40-raw are mutually exclusive")]
    AmbiguousRatio40,

    #[error("invalid ratio40: {0} (must be strictly between 0 and 1)")]
    InvalidRatio40(Decimal),

    #[error("invalid raw syntax: {0:?} (expected <grams>/? or ?/<grams>)")]
    InvalidRawSyntax(String),

    #[error("invalid raw proportions: pour #1 of {pour1}g does not fit a {stage40_water}g 40% stage")]
    InvalidRawProportions { pour1: Decimal, stage40_water: Decimal },
}

/// Domain errors: the two terminal error kinds of a brew resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
}

impl DomainError {
    /// True for ordinary input-validation failures.
    pub fn is_config(&self) -> bool {
        matches!(self, DomainError::Config(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
