//! Domain entities: core data structures

use rust_decimal::Decimal;
use serde::Serialize;

/// Default coffee-to-water ratio denominator (1:15).
pub const DEFAULT_RATIO: u32 = 15;

/// Default pour count of the 60% stage.
pub const DEFAULT_POURS60: u8 = 3;

/// Allowed pour counts of the 60% stage.
pub const POURS60_RANGE: std::ops::RangeInclusive<u8> = 1..=3;

/// Default share of the 40% stage given to pour #1.
pub const DEFAULT_RATIO40: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Unresolved user input, as produced by argument parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrewInput {
    /// Coffee-to-water ratio as denominator
    pub ratio: Option<u32>,
    /// Coffee mass in grams
    pub coffee_g: Option<Decimal>,
    /// Water mass in grams
    pub water_g: Option<Decimal>,
    /// Permit both masses at once
    pub ratio_override: bool,
    /// Seconds per pour interval
    pub pour_time: u32,
    /// Share of the 40% stage for pour #1
    pub ratio40: Option<Decimal>,
    /// Raw gram split of the 40% stage, e.g. `40/?`
    pub ratio40_raw: Option<String>,
    /// Pour count of the 60% stage
    pub pours60: Option<u8>,
}

/// Resolved, fully determined brew parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrewRequest {
    pub coffee_mass: Decimal,
    pub water_mass: Decimal,
    pub ratio: u32,
    pub pour_time_seconds: u32,
    pub pours60_count: u8,
}

/// How the 40% stage water splits into pour #1 (acidity) and pour #2 (sweetness).
///
/// `pour1 + pour2 == stage40_water` holds exactly: pour #2 is always the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage40Split {
    pub stage40_water: Decimal,
    pub ratio40: Decimal,
    pub pour1: Decimal,
    pub pour2: Decimal,
}

/// What happens at a step of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    Pour {
        pour_mass: Decimal,
        cumulative_mass: Decimal,
    },
    RemoveBrewer,
}

/// One timed step of the plan. `index` is the 0-based sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PourStep {
    pub index: usize,
    pub timestamp_seconds: u64,
    #[serde(flatten)]
    pub kind: StepKind,
}

impl PourStep {
    /// Mass poured at this step, `None` for the marker step.
    pub fn pour_mass(&self) -> Option<Decimal> {
        match self.kind {
            StepKind::Pour { pour_mass, .. } => Some(pour_mass),
            StepKind::RemoveBrewer => None,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.kind, StepKind::RemoveBrewer)
    }
}

/// Ordered pours followed by the "remove brewer" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrewPlan {
    pub steps: Vec<PourStep>,
}

impl BrewPlan {
    /// Steps that pour water (the marker excluded).
    pub fn pours(&self) -> impl Iterator<Item = &PourStep> {
        self.steps.iter().filter(|s| !s.is_marker())
    }

    /// Sum of all pour masses.
    pub fn total_poured(&self) -> Decimal {
        self.pours().filter_map(PourStep::pour_mass).sum()
    }
}
