//! kcomp core: the pipeline assembling the comparison report.
//!
//! Each selected scenario runs the same four steps in order: draw the
//! illustrative sample, derive hyperparameters, load the precomputed result
//! table, render the figures. Scenarios share no state; the first failure
//! aborts the run.

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod pipeline;

pub use error::{CoreError, Result};
pub use exit_codes::ExitCode;
