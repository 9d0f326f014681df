//! Domain layer: brewing entities and input rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod mass;
pub mod raw_split;
pub mod selection;

pub use entities::*;
pub use error::{ConfigError, DomainError, DomainResult};
pub use raw_split::RawSplit;
pub use selection::{select_one, Selection};
