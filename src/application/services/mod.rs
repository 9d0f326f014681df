//! Application services
//!
//! One module per pipeline stage, run in order by `BrewService`:
//! input → stage40 → schedule → render.

mod brew;
pub mod input;
pub mod render;
pub mod schedule;
pub mod stage40;

pub use brew::{BrewOutcome, BrewService};
pub use input::resolve_request;
pub use render::{render_header, render_plan, render_step};
pub use schedule::build_plan;
pub use stage40::{resolve_stage40, resolve_stage40_or};
