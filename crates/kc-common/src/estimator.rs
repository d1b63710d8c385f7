//! Posterior point estimators compared in the report.

use serde::{Deserialize, Serialize};

/// Cluster-count estimators, one per comparison panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    /// Marginal posterior mode of the number of clusters.
    Mode,
    /// Partition maximizing posterior probability (0-1 loss).
    Map,
    /// Partition minimizing posterior-expected Variation of Information.
    Vi,
    /// Partition minimizing posterior-expected Binder loss.
    Binder,
}

impl Estimator {
    /// Fixed row-major panel order of the comparison grid.
    pub const PANEL_ORDER: [Estimator; 4] = [
        Estimator::Mode,
        Estimator::Map,
        Estimator::Vi,
        Estimator::Binder,
    ];

    /// Panel caption.
    pub fn label(&self) -> &'static str {
        match self {
            Estimator::Mode => "Marginal posterior mode",
            Estimator::Map => "MAP",
            Estimator::Vi => "VI",
            Estimator::Binder => "Binder",
        }
    }

    /// Column name in the result tables.
    pub fn column(&self) -> &'static str {
        match self {
            Estimator::Mode => "kmode",
            Estimator::Map => "kMAP",
            Estimator::Vi => "kVI",
            Estimator::Binder => "kBinder",
        }
    }
}

impl std::fmt::Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_order_is_mode_map_vi_binder() {
        let labels: Vec<_> = Estimator::PANEL_ORDER.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Marginal posterior mode", "MAP", "VI", "Binder"]);
    }

    #[test]
    fn columns_match_result_schema() {
        assert_eq!(Estimator::Mode.column(), "kmode");
        assert_eq!(Estimator::Map.column(), "kMAP");
        assert_eq!(Estimator::Vi.column(), "kVI");
        assert_eq!(Estimator::Binder.column(), "kBinder");
    }
}
