//! Plan rendering: header block and one text row per step

use crate::domain::mass::display_mass;
use crate::domain::{BrewPlan, BrewRequest, PourStep, Stage40Split, StepKind};

/// Label printed on the marker row instead of mass figures.
pub const REMOVE_BREWER: &str = "REMOVE BREWER";

/// Header block describing the resolved brew.
pub fn render_header(request: &BrewRequest, split: &Stage40Split) -> Vec<String> {
    vec![
        format!("Coffee    : {}g", request.coffee_mass),
        format!("Water (t) : {}g", request.water_mass),
        format!("Ratio C/W : 1:{}", request.ratio),
        format!("Ratio 40% : {}", split.ratio40),
        format!("Pours 60% : {}", request.pours60_count),
    ]
}

/// One row per step: `#<n> |<m:ss>| <cumulative>g (+<delta>g)`.
pub fn render_plan(plan: &BrewPlan) -> Vec<String> {
    plan.steps.iter().map(render_step).collect()
}

pub fn render_step(step: &PourStep) -> String {
    let time = format_timestamp(step.timestamp_seconds);
    match step.kind {
        StepKind::Pour {
            pour_mass,
            cumulative_mass,
        } => format!(
            "#{} |{}| {}g (+{}g)",
            step.index + 1,
            time,
            display_mass(cumulative_mass),
            display_mass(pour_mass)
        ),
        StepKind::RemoveBrewer => format!("#- |{}| {}", time, REMOVE_BREWER),
    }
}

/// `m:ss`, seconds zero-padded.
pub fn format_timestamp(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
