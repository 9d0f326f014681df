//! Tests for the schedule builder

use std::str::FromStr;

use rstest::rstest;
use rust_decimal::Decimal;

use foursix::application::services::{build_plan, resolve_stage40};
use foursix::domain::{BrewPlan, BrewRequest, StepKind};

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn plan_for(water: &str, pours60: u8, pour_time: u32) -> (BrewRequest, BrewPlan) {
    let request = BrewRequest {
        coffee_mass: d("20"),
        water_mass: d(water),
        ratio: 15,
        pour_time_seconds: pour_time,
        pours60_count: pours60,
    };
    let split = resolve_stage40(request.water_mass, None, None).unwrap();
    let plan = build_plan(&request, &split);
    (request, plan)
}

fn masses(plan: &BrewPlan) -> Vec<String> {
    plan.pours()
        .filter_map(|s| s.pour_mass())
        .map(|m| m.normalize().to_string())
        .collect()
}

fn cumulative(plan: &BrewPlan) -> Vec<String> {
    plan.steps
        .iter()
        .filter_map(|s| match s.kind {
            StepKind::Pour {
                cumulative_mass, ..
            } => Some(cumulative_mass.to_string()),
            StepKind::RemoveBrewer => None,
        })
        .collect()
}

#[test]
fn given_300g_default_split_when_building_then_five_even_pours() {
    // Act
    let (_, plan) = plan_for("300.0", 3, 45);

    // Assert
    assert_eq!(masses(&plan), vec!["60", "60", "60", "60", "60"]);
    assert_eq!(
        cumulative(&plan),
        vec!["60.0", "120.0", "180.0", "240.0", "300.0"]
    );
    assert_eq!(plan.steps.len(), 6);
    assert!(plan.steps[5].is_marker());
}

#[test]
fn given_uneven_stage60_when_building_then_last_pour_takes_exact_remainder() {
    // Arrange: stage60 = 300.7 - 120.28 = 180.42; 180.42 / 3 = 60.14 -> 60.1

    // Act
    let (_, plan) = plan_for("300.7", 3, 30);

    // Assert
    assert_eq!(masses(&plan), vec!["60.1", "60.18", "60.1", "60.1", "60.22"]);
    assert_eq!(
        cumulative(&plan),
        vec!["60.1", "120.3", "180.4", "240.5", "300.7"]
    );
}

#[rstest]
#[case("300.0", 1)]
#[case("300.0", 2)]
#[case("300.0", 3)]
#[case("300.7", 1)]
#[case("300.7", 2)]
#[case("300.7", 3)]
#[case("251.3", 3)]
#[case("1000.1", 3)]
#[case("0.1", 2)]
fn given_any_pour_count_when_building_then_stage60_sums_exactly(
    #[case] water: &str,
    #[case] pours60: u8,
) {
    // Act
    let (request, plan) = plan_for(water, pours60, 45);

    // Assert
    let pours: Vec<Decimal> = plan.pours().filter_map(|s| s.pour_mass()).collect();
    assert_eq!(pours.len(), 2 + usize::from(pours60));
    let stage60: Decimal = pours[2..].iter().sum();
    assert_eq!(stage60, request.water_mass - request.water_mass * d("0.4"));
    assert_eq!(plan.total_poured(), request.water_mass);
}

#[test]
fn given_pour_time_when_building_then_timestamps_follow_sequence_position() {
    // Act
    let (_, plan) = plan_for("300.0", 2, 40);

    // Assert
    let times: Vec<u64> = plan.steps.iter().map(|s| s.timestamp_seconds).collect();
    assert_eq!(times, vec![0, 40, 80, 120, 160]);
    let indices: Vec<usize> = plan.steps.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(plan.steps[4].kind, StepKind::RemoveBrewer);
}

#[test]
fn given_single_stage60_pour_when_building_then_pours_whole_stage_at_once() {
    let (_, plan) = plan_for("300.0", 1, 45);

    assert_eq!(masses(&plan), vec!["60", "60", "180"]);
}
