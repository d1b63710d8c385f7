//! Error types for figure rendering.

use thiserror::Error;

/// Result type for plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors from figure rendering.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Drawing backend failure.
    #[error("drawing failed: {0}")]
    Backend(String),

    /// Nothing to draw.
    #[error("no data to plot for {0}")]
    EmptyData(String),
}

impl PlotError {
    pub(crate) fn backend<E: std::fmt::Display>(err: E) -> Self {
        PlotError::Backend(err.to_string())
    }
}
