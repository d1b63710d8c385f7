//! Concentration-parameter levels used as a grouping axis.
//!
//! The level is a plotting/grouping key only: no computation in this tool
//! consumes it as a live parameter.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One level of the Dirichlet concentration parameter α.
///
/// Adaptive levels scale as `numerator/log(n)`; fixed levels are constants.
/// The textual form round-trips through [`FromStr`] and [`std::fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlphaLevel {
    /// α proportional to 1/log(n), with the given numerator.
    Adaptive { numerator: u32 },
    /// A fixed constant.
    Fixed(f64),
}

/// Failure to parse a concentration level from its textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid concentration level: {0:?}")]
pub struct ParseAlphaError(pub String);

impl AlphaLevel {
    /// Axis label: adaptive levels render as a textual fraction, fixed
    /// levels with two decimals.
    pub fn label(&self) -> String {
        match self {
            AlphaLevel::Adaptive { numerator } => format!("{numerator}/log(n)"),
            AlphaLevel::Fixed(value) => format!("{value:.2}"),
        }
    }

    fn sort_key(&self) -> (u8, f64) {
        match self {
            AlphaLevel::Adaptive { numerator } => (0, f64::from(*numerator)),
            AlphaLevel::Fixed(value) => (1, *value),
        }
    }
}

impl FromStr for AlphaLevel {
    type Err = ParseAlphaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(numerator) = trimmed.strip_suffix("/log(n)") {
            return numerator
                .trim()
                .parse::<u32>()
                .map(|numerator| AlphaLevel::Adaptive { numerator })
                .map_err(|_| ParseAlphaError(s.to_string()));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(AlphaLevel::Fixed(value)),
            _ => Err(ParseAlphaError(s.to_string())),
        }
    }
}

impl std::fmt::Display for AlphaLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

// Levels are finite by construction (FromStr rejects non-finite values), so
// total ordering is well defined.
impl Eq for AlphaLevel {}

impl Ord for AlphaLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        let (kind_a, value_a) = self.sort_key();
        let (kind_b, value_b) = other.sort_key();
        kind_a.cmp(&kind_b).then(value_a.total_cmp(&value_b))
    }
}

impl PartialOrd for AlphaLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for AlphaLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AlphaLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_labels_render_as_fractions() {
        assert_eq!(AlphaLevel::Adaptive { numerator: 1 }.label(), "1/log(n)");
        assert_eq!(AlphaLevel::Adaptive { numerator: 2 }.label(), "2/log(n)");
    }

    #[test]
    fn fixed_labels_use_two_decimals() {
        assert_eq!(AlphaLevel::Fixed(0.5).label(), "0.50");
        assert_eq!(AlphaLevel::Fixed(2.0).label(), "2.00");
    }

    #[test]
    fn parse_round_trips_display() {
        for level in [
            AlphaLevel::Adaptive { numerator: 1 },
            AlphaLevel::Adaptive { numerator: 2 },
            AlphaLevel::Fixed(0.5),
            AlphaLevel::Fixed(1.0),
            AlphaLevel::Fixed(2.0),
        ] {
            let parsed: AlphaLevel = level.label().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<AlphaLevel>().is_err());
        assert!("log(n)".parse::<AlphaLevel>().is_err());
        assert!("x/log(n)".parse::<AlphaLevel>().is_err());
        assert!("-1".parse::<AlphaLevel>().is_err());
        assert!("NaN".parse::<AlphaLevel>().is_err());
    }

    #[test]
    fn adaptive_sorts_before_fixed() {
        let mut levels = vec![
            AlphaLevel::Fixed(2.0),
            AlphaLevel::Adaptive { numerator: 2 },
            AlphaLevel::Fixed(0.5),
            AlphaLevel::Adaptive { numerator: 1 },
            AlphaLevel::Fixed(1.0),
        ];
        levels.sort();
        assert_eq!(
            levels,
            vec![
                AlphaLevel::Adaptive { numerator: 1 },
                AlphaLevel::Adaptive { numerator: 2 },
                AlphaLevel::Fixed(0.5),
                AlphaLevel::Fixed(1.0),
                AlphaLevel::Fixed(2.0),
            ]
        );
    }

    #[test]
    fn serde_uses_textual_form() {
        let level = AlphaLevel::Adaptive { numerator: 1 };
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, "\"1/log(n)\"");
        let back: AlphaLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }
}
