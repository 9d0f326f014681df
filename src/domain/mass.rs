//! Decimal helpers for gram masses and ratios
//!
//! Every derived value is rounded half-up, the way a kitchen scale reading is.

use rust_decimal::{Decimal, RoundingStrategy};

/// Share of the total water poured in the 40% stage.
pub const STAGE40_SHARE: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Round half-up to `dp` places, keeping exactly `dp` places of scale.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Round a gram mass to one decimal.
pub fn round_mass(value: Decimal) -> Decimal {
    round_half_up(value, 1)
}

/// Round a ratio to three decimals.
pub fn round_ratio(value: Decimal) -> Decimal {
    round_half_up(value, 3)
}

/// Water poured in the 40% stage; not rounded.
pub fn stage40_water(water_mass: Decimal) -> Decimal {
    water_mass * STAGE40_SHARE
}

/// Display form of a mass: at least one decimal, trailing zeros trimmed beyond that.
pub fn display_mass(value: Decimal) -> String {
    let mut normalized = value.normalize();
    if normalized.scale() < 1 {
        normalized.rescale(1);
    }
    normalized.to_string()
}
