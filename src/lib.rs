//! Pour-by-pour water schedule for the 4:6 pour-over brewing method.
//!
//! The total water splits into a 40% stage of two pours (acidity, sweetness)
//! and a 60% stage of one to three even pours (strength). Masses are exact
//! decimals, rounded half-up to one decimal after each derivation step.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
