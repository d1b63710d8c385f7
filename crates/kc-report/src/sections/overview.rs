//! Overview section data.

use serde::{Deserialize, Serialize};

/// Run-level summary shown on the first tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewSection {
    /// Seed used for the illustrative samples.
    pub seed: u64,
    /// Directory the result tables were loaded from.
    pub results_dir: String,
    /// Scenario headings, in report order.
    pub scenarios: Vec<String>,
    /// Total result rows consumed across scenarios.
    pub total_rows: usize,
}
