//! Per-scenario section data.

use serde::{Deserialize, Serialize};

/// One labelled hyperparameter with its derivation note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperparamRow {
    /// Symbol shown in the table.
    pub name: String,
    /// Rendered value.
    pub value: String,
    /// Short derivation note.
    pub note: String,
}

/// Result-table statistics for the stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    /// Completed runs in the table.
    pub rows: usize,
    /// Distinct replicates.
    pub replicates: usize,
    /// Concentration-level labels, in axis order.
    pub alpha_levels: Vec<String>,
    /// Sample sizes, ascending.
    pub sample_sizes: Vec<u32>,
}

/// One scenario tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSection {
    /// Stable identifier used as the tab id.
    pub id: String,
    /// Heading shown on the tab.
    pub title: String,
    /// Narrative paragraphs; escaped at render time.
    pub narrative: Vec<String>,
    /// Derived base-measure hyperparameters.
    pub hyperparams: Vec<HyperparamRow>,
    /// Illustrative figure as SVG markup, inlined verbatim.
    #[serde(default, skip_serializing)]
    pub illustration_svg: Option<String>,
    /// 2×2 estimator comparison grid as SVG markup, inlined verbatim.
    #[serde(default, skip_serializing)]
    pub grid_svg: String,
    /// Result-table statistics.
    pub summary: TableSummary,
}
