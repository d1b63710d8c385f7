//! Top-level error type for the kcomp CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Result type for kcomp operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Result-table loading failed.
    #[error(transparent)]
    Data(#[from] kc_data::DataError),

    /// Figure rendering failed.
    #[error(transparent)]
    Plot(#[from] kc_plot::PlotError),

    /// Report generation failed.
    #[error(transparent)]
    Report(#[from] kc_report::ReportError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The illustrative sample could not be summarized.
    #[error("degenerate illustrative sample for scenario {0}")]
    DegenerateSample(String),
}

impl CoreError {
    /// Exit code for this failure.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CoreError::Data(_) => ExitCode::DataError,
            CoreError::Io { .. } => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}
