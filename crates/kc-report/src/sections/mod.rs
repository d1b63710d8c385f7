//! Report section data structures.

pub mod overview;
pub mod scenario;

pub use overview::OverviewSection;
pub use scenario::{HyperparamRow, ScenarioSection, TableSummary};
