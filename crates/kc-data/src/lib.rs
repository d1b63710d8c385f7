//! Scenario data generation and result-table loading.
//!
//! Two independent concerns live here:
//! - [`generate`]: seeded illustrative samples for each scenario. These feed
//!   the illustration figure and the hyperparameter derivation only.
//! - [`results`]: the loader for the precomputed simulation tables that the
//!   comparison grids are drawn from. The sampler that produced those tables
//!   is not part of this tool.

pub mod error;
pub mod generate;
pub mod results;

pub use error::{DataError, Result};
pub use generate::{generate, Sample};
pub use results::{ResultRow, ResultTable};
