//! Schedule building: the ordered, timed list of pours

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::mass::{round_mass, stage40_water};
use crate::domain::{BrewPlan, BrewRequest, PourStep, Stage40Split, StepKind};

/// Build the full plan: the two 40% stage pours, the 60% stage pours and the
/// trailing "remove brewer" marker.
///
/// Every 60% pour but the last is `stage60 / n` rounded; the last one takes the
/// exact remainder so the stage sums to `stage60` exactly.
#[instrument(level = "debug", skip_all)]
pub fn build_plan(request: &BrewRequest, split: &Stage40Split) -> BrewPlan {
    let stage40_water = stage40_water(request.water_mass);
    let stage60_water = request.water_mass - stage40_water;
    let pours60 = request.pours60_count.max(1);

    let pour_n = round_mass(stage60_water / Decimal::from(pours60));
    let pour_last = stage60_water - pour_n * Decimal::from(pours60 - 1);
    debug!(
        "stage60: water={}g pourN={}g pourLast={}g",
        stage60_water, pour_n, pour_last
    );

    let masses = [split.pour1, split.pour2]
        .into_iter()
        .chain(std::iter::repeat(pour_n).take(usize::from(pours60 - 1)))
        .chain(std::iter::once(pour_last));

    let timestamp = |index: usize| index as u64 * u64::from(request.pour_time_seconds);
    let mut cumulative = Decimal::ZERO;
    let mut steps: Vec<PourStep> = masses
        .enumerate()
        .map(|(index, pour_mass)| {
            cumulative = round_mass(cumulative + pour_mass);
            PourStep {
                index,
                timestamp_seconds: timestamp(index),
                kind: StepKind::Pour {
                    pour_mass,
                    cumulative_mass: cumulative,
                },
            }
        })
        .collect();

    let marker_index = steps.len();
    steps.push(PourStep {
        index: marker_index,
        timestamp_seconds: timestamp(marker_index),
        kind: StepKind::RemoveBrewer,
    });

    BrewPlan { steps }
}
