//! kcomp math utilities.
//!
//! Everything in this crate is deterministic: identical inputs produce
//! identical outputs, which is what makes the report reproducible.

pub mod boxstats;
pub mod hyper;
pub mod summary;

pub use boxstats::FiveNumber;
pub use hyper::{derive, HyperParams};
pub use summary::SampleSummary;
