//! Self-contained HTML report generation.
//!
//! One HTML document per run: an overview tab plus one tab per scenario,
//! each with narrative text, the derived hyperparameters, the illustrative
//! figure, and the 2×2 estimator comparison grid.
//!
//! # Properties
//!
//! - **Single-file output**: figures arrive as pre-rendered SVG markup and
//!   are inlined verbatim, so the document needs no network access.
//! - **Escaping**: all text that did not originate as generated SVG is
//!   HTML-escaped.
//! - **Minification**: skipped in debug builds, configurable otherwise.
//!
//! # Example
//!
//! ```no_run
//! use kc_report::{ReportConfig, ReportData, ReportGenerator};
//!
//! let generator = ReportGenerator::new(ReportConfig::default());
//! # let data: ReportData = unimplemented!();
//! let html = generator.generate(data).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod sections;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use generator::{ReportData, ReportGenerator};
pub use sections::{HyperparamRow, OverviewSection, ScenarioSection, TableSummary};
