//! kcomp shared types.
//!
//! This crate provides the vocabulary shared across kcomp crates:
//! - Simulation scenarios and their fixed constants
//! - Posterior point estimators and the comparison panel order
//! - Concentration-parameter levels used as a grouping axis
//! - Output format specifications

pub mod concentration;
pub mod estimator;
pub mod output;
pub mod scenario;

pub use concentration::{AlphaLevel, ParseAlphaError};
pub use estimator::Estimator;
pub use output::OutputFormat;
pub use scenario::Scenario;
