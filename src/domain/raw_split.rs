//! Parser for the raw stage-40 split: `<grams>/?` or `?/<grams>`
//!
//! One slot carries a gram amount, the other a placeholder (`?` or `*`).
//! The grams are a non-negative decimal literal: digits with at most one `.`.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::trace;

use crate::domain::error::ConfigError;

/// A parsed raw split, tagged by the slot that carries the gram amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSplit {
    /// `<grams>/?`: the amount sits in the first (acidity) slot.
    First(Decimal),
    /// `?/<grams>`: the amount sits in the second (sweetness) slot.
    Second(Decimal),
}

impl RawSplit {
    /// Parse a raw split string.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRawSyntax(input.to_string());

        let (left, right) = input.split_once('/').ok_or_else(invalid)?;
        trace!("raw split slots: left={:?} right={:?}", left, right);

        match (is_placeholder(left), is_placeholder(right)) {
            (false, true) => parse_grams(left).map(RawSplit::First).ok_or_else(invalid),
            (true, false) => parse_grams(right).map(RawSplit::Second).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }

    /// The gram amount carried by the split.
    pub fn grams(&self) -> Decimal {
        match self {
            RawSplit::First(g) | RawSplit::Second(g) => *g,
        }
    }
}

fn is_placeholder(slot: &str) -> bool {
    matches!(slot, "?" | "*")
}

/// Digits with at most one `.` and at least one digit.
fn parse_grams(slot: &str) -> Option<Decimal> {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in slot.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    // normalize "40." and ".5"
    let literal = match (slot.starts_with('.'), slot.ends_with('.')) {
        (true, _) => format!("0{slot}"),
        (_, true) => slot.trim_end_matches('.').to_string(),
        _ => slot.to_string(),
    };
    Decimal::from_str(&literal).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_first_slot() {
        assert_eq!(RawSplit::parse("40/?").unwrap(), RawSplit::First(d("40")));
        assert_eq!(RawSplit::parse("40.5/*").unwrap(), RawSplit::First(d("40.5")));
    }

    #[test]
    fn test_parse_second_slot() {
        assert_eq!(RawSplit::parse("?/80").unwrap(), RawSplit::Second(d("80")));
        assert_eq!(RawSplit::parse("*/72.25").unwrap(), RawSplit::Second(d("72.25")));
    }

    #[test]
    fn test_parse_loose_decimal_literals() {
        assert_eq!(RawSplit::parse("40./?").unwrap(), RawSplit::First(d("40")));
        assert_eq!(RawSplit::parse("?/.5").unwrap(), RawSplit::Second(d("0.5")));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "40/50", "?/?", "*/?", "", "/", "40", "?", "40/", "/?", "-40/?", "4.0.0/?",
            "40 /?", "?/4e1", "./?", "40/?/1", "40\\?",
        ] {
            let err = RawSplit::parse(input).unwrap_err();
            assert_eq!(err, ConfigError::InvalidRawSyntax(input.to_string()), "input {input:?}");
        }
    }

    #[test]
    fn test_grams() {
        assert_eq!(RawSplit::First(d("12.5")).grams(), d("12.5"));
        assert_eq!(RawSplit::Second(d("3")).grams(), d("3"));
    }
}
