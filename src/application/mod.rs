//! Application layer: the brewing pipeline
//!
//! Resolves inputs, derives the pour schedule and renders it. Pure functions only.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
