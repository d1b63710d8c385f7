//! Report generator implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::sections::{OverviewSection, ScenarioSection};

/// Complete report data structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    /// Report configuration.
    pub config: ReportConfig,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Generator version.
    pub generator_version: String,
    /// Overview section.
    pub overview: OverviewSection,
    /// Scenario sections, in report order.
    pub scenarios: Vec<ScenarioSection>,
}

impl ReportData {
    /// Get the report title.
    pub fn title(&self) -> String {
        self.config
            .title
            .clone()
            .unwrap_or_else(|| "Cluster-Count Estimator Comparison".to_string())
    }
}

/// Report generator.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a new report generator with configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate the report document.
    pub fn generate(&self, data: ReportData) -> Result<String> {
        if data.scenarios.is_empty() {
            return Err(ReportError::MissingData(
                "no scenario sections to render".to_string(),
            ));
        }
        debug!(scenarios = data.scenarios.len(), "generating report");
        self.render_html(&data)
    }

    fn render_html(&self, data: &ReportData) -> Result<String> {
        let html = self.generate_html(data);

        // Optionally minify
        let output = if cfg!(debug_assertions) || !self.config.minify {
            html
        } else {
            let cfg = minify_html::Cfg {
                minify_js: true,
                minify_css: true,
                ..Default::default()
            };
            String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).unwrap_or(html)
        };

        info!(
            bytes = output.len(),
            title = %data.title(),
            "Report generated"
        );

        Ok(output)
    }

    fn generate_html(&self, data: &ReportData) -> String {
        let title = data.title();
        // Figure markup is skipped during serialization, so this stays small.
        let data_json =
            serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string());

        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="kc-report {version}">
    <meta name="robots" content="noindex, nofollow">
    <style>
        :root {{
            --bg-primary: #ffffff;
            --bg-secondary: #f9fafb;
            --text-primary: #111827;
            --text-secondary: #6b7280;
            --border-color: #e5e7eb;
            --accent-color: #3b82f6;
        }}
        @media (prefers-color-scheme: dark) {{
            :root {{
                --bg-primary: #111827;
                --bg-secondary: #1f2937;
                --text-primary: #f9fafb;
                --text-secondary: #9ca3af;
                --border-color: #374151;
                --accent-color: #60a5fa;
            }}
        }}
        body {{
            background-color: var(--bg-primary);
            color: var(--text-primary);
            font-family: ui-sans-serif, system-ui, sans-serif;
            line-height: 1.5;
            margin: 0;
        }}
        .container {{
            max-width: 64rem;
            margin: 0 auto;
            padding: 2rem 1rem;
        }}
        .card {{
            background-color: var(--bg-secondary);
            border: 1px solid var(--border-color);
            border-radius: 0.5rem;
            padding: 1.5rem;
            margin-bottom: 1rem;
        }}
        .stat-row {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(9rem, 1fr));
            gap: 1rem;
            margin-bottom: 1rem;
        }}
        .stat-card {{
            text-align: center;
            padding: 1rem;
        }}
        .stat-value {{
            font-size: 1.6rem;
            font-weight: 700;
            color: var(--accent-color);
        }}
        .stat-label {{
            font-size: 0.875rem;
            color: var(--text-secondary);
        }}
        nav {{
            display: flex;
            border-bottom: 1px solid var(--border-color);
            margin-bottom: 1.5rem;
        }}
        .tab-btn {{
            padding: 0.75rem 1.5rem;
            border: none;
            background: none;
            color: inherit;
            font: inherit;
            border-bottom: 2px solid transparent;
            cursor: pointer;
        }}
        .tab-btn:hover {{
            background-color: var(--bg-secondary);
        }}
        .tab-btn.active {{
            border-bottom-color: var(--accent-color);
            color: var(--accent-color);
        }}
        .tab-content {{
            display: none;
        }}
        .tab-content.active {{
            display: block;
        }}
        .figure {{
            overflow-x: auto;
            text-align: center;
            margin: 1rem 0;
        }}
        .figure svg {{
            max-width: 100%;
            height: auto;
        }}
        table.params {{
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
        }}
        table.params th, table.params td {{
            text-align: left;
            padding: 0.4rem 0.6rem;
            border-bottom: 1px solid var(--border-color);
        }}
        footer {{
            margin-top: 2rem;
            padding-top: 1rem;
            border-top: 1px solid var(--border-color);
            font-size: 0.875rem;
            text-align: center;
            color: var(--text-secondary);
        }}
        @media print {{
            nav {{ display: none !important; }}
            .tab-content {{ display: block !important; }}
        }}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{title}</h1>
            <p style="color: var(--text-secondary)">
                Generated: {generated_at} | Seed: {seed}
            </p>
        </header>

        <nav>
            {tab_buttons}
        </nav>

        <main>
            {tab_contents}
        </main>

        <footer>
            <p>kc-report v{version}</p>
        </footer>
    </div>

    <script>
        // Report metadata (figures excluded)
        const REPORT_DATA = {data_json};

        function switchTab(tabId) {{
            document.querySelectorAll('.tab-btn').forEach(btn => {{
                btn.classList.toggle('active', btn.dataset.tab === tabId);
            }});
            document.querySelectorAll('.tab-content').forEach(content => {{
                content.classList.toggle('active', content.id === 'tab-' + tabId);
            }});
        }}

        document.querySelectorAll('.tab-btn').forEach(btn => {{
            btn.addEventListener('click', () => switchTab(btn.dataset.tab));
        }});

        const firstTab = document.querySelector('.tab-btn');
        if (firstTab) switchTab(firstTab.dataset.tab);
    </script>
</body>
</html>"##,
            title = html_escape(&title),
            version = env!("CARGO_PKG_VERSION"),
            generated_at = data.generated_at.format("%Y-%m-%d %H:%M UTC"),
            seed = data.overview.seed,
            tab_buttons = self.generate_tab_buttons(data),
            tab_contents = self.generate_tab_contents(data),
            data_json = data_json,
        )
    }

    fn generate_tab_buttons(&self, data: &ReportData) -> String {
        let mut buttons =
            vec![r#"<button class="tab-btn" data-tab="overview">Overview</button>"#.to_string()];
        for section in &data.scenarios {
            buttons.push(format!(
                r#"<button class="tab-btn" data-tab="{id}">{title}</button>"#,
                id = html_escape(&section.id),
                title = html_escape(&section.title),
            ));
        }
        buttons.join("\n            ")
    }

    fn generate_tab_contents(&self, data: &ReportData) -> String {
        let mut contents = vec![self.generate_overview_tab(data)];
        for section in &data.scenarios {
            contents.push(self.generate_scenario_tab(section));
        }
        contents.join("\n")
    }

    fn generate_overview_tab(&self, data: &ReportData) -> String {
        let overview = &data.overview;
        let scenario_list: String = overview
            .scenarios
            .iter()
            .map(|title| format!("<li>{}</li>", html_escape(title)))
            .collect();

        format!(
            r##"<section id="tab-overview" class="tab-content">
    <div class="stat-row">
        <div class="card stat-card">
            <div class="stat-value">{scenario_count}</div>
            <div class="stat-label">Scenarios</div>
        </div>
        <div class="card stat-card">
            <div class="stat-value">{total_rows}</div>
            <div class="stat-label">Result Rows</div>
        </div>
        <div class="card stat-card">
            <div class="stat-value">{seed}</div>
            <div class="stat-label">Sample Seed</div>
        </div>
    </div>

    <div class="card">
        <h3>About this report</h3>
        <p>
            Each scenario compares four cluster-count summaries of a Dirichlet
            process mixture posterior: the marginal posterior mode and the
            cluster counts of the MAP, VI, and Binder point-estimate
            partitions. The box plots are drawn from precomputed simulation
            tables; this document does not rerun the sampler.
        </p>
        <ul>{scenario_list}</ul>
        <p style="color: var(--text-secondary)">
            Result tables loaded from <code>{results_dir}</code>.
        </p>
    </div>
</section>"##,
            scenario_count = overview.scenarios.len(),
            total_rows = overview.total_rows,
            seed = overview.seed,
            scenario_list = scenario_list,
            results_dir = html_escape(&overview.results_dir),
        )
    }

    fn generate_scenario_tab(&self, section: &ScenarioSection) -> String {
        let narrative: String = section
            .narrative
            .iter()
            .map(|p| format!("<p>{}</p>\n        ", html_escape(p)))
            .collect();

        let param_rows: String = section
            .hyperparams
            .iter()
            .map(|row| {
                format!(
                    r#"<tr><td>{}</td><td>{}</td><td style="color: var(--text-secondary)">{}</td></tr>"#,
                    html_escape(&row.name),
                    html_escape(&row.value),
                    html_escape(&row.note),
                )
            })
            .collect();

        // The SVG figures are generated internally and inlined as-is.
        let illustration = section
            .illustration_svg
            .as_deref()
            .map(|svg| format!(r#"<div class="figure">{svg}</div>"#))
            .unwrap_or_default();

        format!(
            r##"<section id="tab-{id}" class="tab-content">
    <div class="stat-row">
        <div class="card stat-card">
            <div class="stat-value">{rows}</div>
            <div class="stat-label">Completed Runs</div>
        </div>
        <div class="card stat-card">
            <div class="stat-value">{replicates}</div>
            <div class="stat-label">Replicates</div>
        </div>
        <div class="card stat-card">
            <div class="stat-value">{levels}</div>
            <div class="stat-label">&alpha; Levels</div>
        </div>
        <div class="card stat-card">
            <div class="stat-value">{sizes}</div>
            <div class="stat-label">Sample Sizes</div>
        </div>
    </div>

    <div class="card">
        <h3>{title}</h3>
        {narrative}{illustration}
    </div>

    <div class="card">
        <h3>Base-measure hyperparameters</h3>
        <table class="params">
            <thead><tr><th>Parameter</th><th>Value</th><th>Derivation</th></tr></thead>
            <tbody>{param_rows}</tbody>
        </table>
    </div>

    <div class="card">
        <h3>Estimator comparison</h3>
        <p style="color: var(--text-secondary)">
            Grouped by concentration level ({level_labels}); shaded by sample
            size ({size_labels}).
        </p>
        <div class="figure">{grid}</div>
    </div>
</section>"##,
            id = html_escape(&section.id),
            rows = section.summary.rows,
            replicates = section.summary.replicates,
            levels = section.summary.alpha_levels.len(),
            sizes = section.summary.sample_sizes.len(),
            title = html_escape(&section.title),
            narrative = narrative,
            illustration = illustration,
            param_rows = param_rows,
            level_labels = html_escape(&section.summary.alpha_levels.join(", ")),
            size_labels = html_escape(
                &section
                    .summary
                    .sample_sizes
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            grid = section.grid_svg,
        )
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
