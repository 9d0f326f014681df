//! Input resolution: ratio, pour count and the coffee/water mass pair

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::mass::round_mass;
use crate::domain::{
    select_one, BrewInput, BrewRequest, ConfigError, DomainError, DomainResult, Selection,
    DEFAULT_POURS60, DEFAULT_RATIO, POURS60_RANGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Amount {
    Coffee,
    Water,
}

impl Amount {
    fn field(self) -> &'static str {
        match self {
            Amount::Coffee => "coffee",
            Amount::Water => "water",
        }
    }
}

/// Resolve raw input into a fully determined brew request.
///
/// Exactly one of coffee or water mass may be given; the other is derived
/// through the ratio and rounded to one decimal.
#[instrument(level = "debug", skip(input))]
pub fn resolve_request(input: &BrewInput) -> DomainResult<BrewRequest> {
    let ratio = input.ratio.unwrap_or(DEFAULT_RATIO);
    if ratio < 1 {
        return Err(ConfigError::InvalidRatio(ratio).into());
    }

    let pours60_count = input.pours60.unwrap_or(DEFAULT_POURS60);
    if !POURS60_RANGE.contains(&pours60_count) {
        return Err(ConfigError::InvalidPours60(pours60_count).into());
    }

    let ratio_d = Decimal::from(ratio);
    let amounts = [
        (Amount::Coffee, input.coffee_g),
        (Amount::Water, input.water_g),
    ];
    let (coffee_mass, water_mass) = match select_one(amounts) {
        Selection::Empty => return Err(ConfigError::AmountRequired.into()),
        Selection::Many(_) if !input.ratio_override => {
            return Err(ConfigError::AmbiguousAmount.into())
        }
        Selection::Many(_) => {
            return Err(DomainError::Unimplemented(
                "overriding the ratio with both coffee and water amounts",
            ))
        }
        Selection::One(Amount::Coffee, coffee) => {
            ensure_positive(Amount::Coffee, coffee)?;
            let water = coffee
                .checked_mul(ratio_d)
                .map(round_mass)
                .ok_or(ConfigError::InvalidAmount {
                    field: Amount::Coffee.field(),
                    value: coffee,
                })?;
            ensure_positive(Amount::Water, water)?;
            (coffee, water)
        }
        Selection::One(Amount::Water, water) => {
            ensure_positive(Amount::Water, water)?;
            let coffee = round_mass(water / ratio_d);
            ensure_positive(Amount::Coffee, coffee)?;
            (coffee, water)
        }
    };
    debug!(
        "resolved: coffee={}g water={}g ratio=1:{} pours60={}",
        coffee_mass, water_mass, ratio, pours60_count
    );

    Ok(BrewRequest {
        coffee_mass,
        water_mass,
        ratio,
        pour_time_seconds: input.pour_time,
        pours60_count,
    })
}

fn ensure_positive(amount: Amount, value: Decimal) -> Result<(), ConfigError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ConfigError::InvalidAmount {
            field: amount.field(),
            value,
        })
    }
}
