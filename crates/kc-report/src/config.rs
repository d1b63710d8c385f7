//! Report configuration.

use serde::{Deserialize, Serialize};

/// Report generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Document title override.
    pub title: Option<String>,
    /// Minify the HTML output (never in debug builds).
    pub minify: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            minify: true,
        }
    }
}

impl ReportConfig {
    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable minification.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }
}
