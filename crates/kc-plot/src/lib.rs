//! SVG figure rendering for the comparison report.
//!
//! Figures are returned as SVG markup strings and inlined into the HTML
//! report; nothing here touches the filesystem.

pub mod error;
pub mod grid;
pub mod illustration;

pub use error::{PlotError, Result};
pub use grid::render_grid;
pub use illustration::render_illustration;
