//! Error types for result-table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors from loading precomputed result tables.
///
/// All of these are fatal to the report: the tables are produced outside
/// this tool and cannot be regenerated here.
#[derive(Error, Debug)]
pub enum DataError {
    /// The result file does not exist.
    #[error("result file not found: {0}")]
    MissingFile(PathBuf),

    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line was not a valid result row.
    #[error("{path}:{line}: malformed result row: {source}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A row violated a table invariant.
    #[error("{path}:{line}: {detail}")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    /// The file parsed but contained no rows.
    #[error("{0}: result table is empty")]
    EmptyTable(PathBuf),
}
