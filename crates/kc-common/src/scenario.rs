//! Simulation scenarios from the comparison study.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Component separation of the bimodal scenario.
///
/// Also the `khat` constant in its hyperparameter derivation.
pub const BIMODAL_SEPARATION: f64 = 1.01;

/// The three simulated-data scenarios.
///
/// Each scenario pairs a generative law for the illustrative sample with a
/// precomputed result table named after its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Univariate standard normal data.
    Miller,
    /// Bivariate data uniform on the interior of the unit disc.
    Raj4,
    /// Univariate two-component normal mixture with means at ±1.01.
    Raj3,
}

impl Scenario {
    /// All scenarios in report order.
    pub const ALL: [Scenario; 3] = [Scenario::Miller, Scenario::Raj4, Scenario::Raj3];

    /// Stable identifier used for tab ids and CLI values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Miller => "miller",
            Scenario::Raj4 => "raj4",
            Scenario::Raj3 => "raj3",
        }
    }

    /// Stem of the precomputed result file for this scenario.
    pub fn result_stem(&self) -> &'static str {
        match self {
            Scenario::Miller => "miller_results",
            Scenario::Raj4 => "raj4_results",
            Scenario::Raj3 => "raj3_results",
        }
    }

    /// Heading used in the report.
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Miller => "Standard normal data",
            Scenario::Raj4 => "Uniform data on the unit disc",
            Scenario::Raj3 => "Bimodal normal mixture",
        }
    }

    /// Size of the illustrative sample.
    pub fn sample_size(&self) -> usize {
        200
    }

    /// Dimensionality of one observation.
    pub fn dim(&self) -> usize {
        match self {
            Scenario::Raj4 => 2,
            _ => 1,
        }
    }

    /// Component separation constant, where the scenario has one.
    pub fn separation(&self) -> Option<f64> {
        match self {
            Scenario::Raj3 => Some(BIMODAL_SEPARATION),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_match_generative_laws() {
        assert_eq!(Scenario::Miller.dim(), 1);
        assert_eq!(Scenario::Raj4.dim(), 2);
        assert_eq!(Scenario::Raj3.dim(), 1);
    }

    #[test]
    fn only_bimodal_has_separation() {
        assert_eq!(Scenario::Raj3.separation(), Some(BIMODAL_SEPARATION));
        assert_eq!(Scenario::Miller.separation(), None);
        assert_eq!(Scenario::Raj4.separation(), None);
    }

    #[test]
    fn result_stems_are_distinct() {
        let stems: Vec<_> = Scenario::ALL.iter().map(|s| s.result_stem()).collect();
        assert_eq!(stems, vec!["miller_results", "raj4_results", "raj3_results"]);
    }
}
