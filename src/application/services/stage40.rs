//! Stage-40 ratio resolution
//!
//! Splits the 40% stage into pour #1 (acidity) and pour #2 (sweetness), either
//! from a direct ratio or from a raw gram split with one placeholder.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::mass::{round_mass, round_ratio, stage40_water};
use crate::domain::{
    select_one, ConfigError, DomainResult, RawSplit, Selection, Stage40Split, DEFAULT_RATIO40,
};

#[derive(Debug, Clone, Copy)]
enum Ratio40Spec<'a> {
    Default(Decimal),
    Direct(Decimal),
    Raw(&'a str),
}

/// Resolve the 40% stage split for `water_mass` grams of total water.
///
/// `ratio40` and `ratio40_raw` are mutually exclusive; with neither set the
/// stage is split evenly.
pub fn resolve_stage40(
    water_mass: Decimal,
    ratio40: Option<Decimal>,
    ratio40_raw: Option<&str>,
) -> DomainResult<Stage40Split> {
    resolve_stage40_or(water_mass, ratio40, ratio40_raw, DEFAULT_RATIO40)
}

/// Like [`resolve_stage40`], with `default_ratio40` used when neither form is set.
///
/// A default is used as is; only a ratio40 the user passed is rounded to three places.
#[instrument(level = "debug")]
pub fn resolve_stage40_or(
    water_mass: Decimal,
    ratio40: Option<Decimal>,
    ratio40_raw: Option<&str>,
    default_ratio40: Decimal,
) -> DomainResult<Stage40Split> {
    if water_mass <= Decimal::ZERO {
        return Err(ConfigError::InvalidAmount {
            field: "water",
            value: water_mass,
        }
        .into());
    }
    let stage40_water = stage40_water(water_mass);

    let spec = match select_one([
        ("ratio40", ratio40.map(Ratio40Spec::Direct)),
        ("ratio40-raw", ratio40_raw.map(Ratio40Spec::Raw)),
    ]) {
        Selection::Empty => Ratio40Spec::Default(default_ratio40),
        Selection::One(_, spec) => spec,
        Selection::Many(_) => return Err(ConfigError::AmbiguousRatio40.into()),
    };

    let (ratio40, pour1) = match spec {
        Ratio40Spec::Default(ratio40) => direct(stage40_water, ratio40)?,
        Ratio40Spec::Direct(ratio40) => direct(stage40_water, round_ratio(ratio40))?,
        Ratio40Spec::Raw(raw) => from_raw(stage40_water, RawSplit::parse(raw)?)?,
    };

    // pour #2 is always the exact remainder
    let pour2 = stage40_water - pour1;
    debug!(
        "stage40: water={}g ratio40={} pour1={}g pour2={}g",
        stage40_water, ratio40, pour1, pour2
    );

    Ok(Stage40Split {
        stage40_water,
        ratio40,
        pour1,
        pour2,
    })
}

fn direct(stage40_water: Decimal, ratio40: Decimal) -> Result<(Decimal, Decimal), ConfigError> {
    if ratio40 <= Decimal::ZERO || ratio40 >= Decimal::ONE {
        return Err(ConfigError::InvalidRatio40(ratio40));
    }
    Ok((ratio40, round_mass(stage40_water * ratio40)))
}

/// `g/?`: pour #1 is `g`. `?/g`: pour #2 is `g` and pour #1 takes the rest.
fn from_raw(stage40_water: Decimal, split: RawSplit) -> Result<(Decimal, Decimal), ConfigError> {
    debug!("raw split: {:?}", split);
    let delta = stage40_water - split.grams();

    let (ratio40, pour1) = match split {
        RawSplit::First(_) => {
            let pour1 = round_mass(stage40_water - delta);
            (round_ratio(Decimal::ONE - delta / stage40_water), pour1)
        }
        RawSplit::Second(_) => (round_ratio(delta / stage40_water), round_mass(delta)),
    };

    let in_range = |v: Decimal, upper: Decimal| v > Decimal::ZERO && v < upper;
    if !in_range(pour1, stage40_water) || !in_range(ratio40, Decimal::ONE) {
        return Err(ConfigError::InvalidRawProportions {
            pour1,
            stage40_water,
        });
    }
    Ok((ratio40, pour1))
}
