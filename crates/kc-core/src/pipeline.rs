//! The per-scenario reporting pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use kc_common::Scenario;
use kc_data::{generate, ResultTable};
use kc_math::{derive, HyperParams, SampleSummary};
use kc_plot::{render_grid, render_illustration};
use kc_report::{
    HyperparamRow, OverviewSection, ReportConfig, ReportData, ReportGenerator, ScenarioSection,
    TableSummary,
};

use crate::error::{CoreError, Result};

/// Default seed, so repeated runs reproduce identical figure data.
pub const DEFAULT_SEED: u64 = 817;

/// Options for one report run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory holding the precomputed result tables.
    pub results_dir: PathBuf,
    /// Output HTML path.
    pub out: PathBuf,
    /// Scenarios to include, in report order.
    pub scenarios: Vec<Scenario>,
    /// Seed for the illustrative samples.
    pub seed: u64,
    /// Report configuration.
    pub config: ReportConfig,
}

/// Run the full pipeline and write the HTML report.
///
/// Returns the number of result rows consumed.
pub fn render_report(opts: &RenderOptions) -> Result<usize> {
    let mut sections = Vec::with_capacity(opts.scenarios.len());
    let mut total_rows = 0usize;
    for (idx, &scenario) in opts.scenarios.iter().enumerate() {
        // Each scenario gets its own stream so adding or dropping one does
        // not perturb the others.
        let mut rng = StdRng::seed_from_u64(opts.seed.wrapping_add(idx as u64));
        let section = build_section(scenario, &opts.results_dir, &mut rng)?;
        total_rows += section.summary.rows;
        sections.push(section);
    }

    let data = ReportData {
        config: opts.config.clone(),
        generated_at: Utc::now(),
        generator_version: env!("CARGO_PKG_VERSION").to_string(),
        overview: OverviewSection {
            seed: opts.seed,
            results_dir: opts.results_dir.display().to_string(),
            scenarios: opts
                .scenarios
                .iter()
                .map(|s| s.title().to_string())
                .collect(),
            total_rows,
        },
        scenarios: sections,
    };

    let generator = ReportGenerator::new(opts.config.clone());
    let html = generator.generate(data)?;
    fs::write(&opts.out, html).map_err(|source| CoreError::Io {
        path: opts.out.clone(),
        source,
    })?;
    info!(out = %opts.out.display(), rows = total_rows, "report written");
    Ok(total_rows)
}

fn build_section(
    scenario: Scenario,
    results_dir: &Path,
    rng: &mut StdRng,
) -> Result<ScenarioSection> {
    let sample = generate(scenario, scenario.sample_size(), rng);
    let summary = SampleSummary::from_rows(&sample.rows)
        .ok_or_else(|| CoreError::DegenerateSample(scenario.as_str().to_string()))?;
    let params = derive(&summary, scenario.separation());
    debug!(
        scenario = scenario.as_str(),
        shape = params.shape,
        rate = params.rate,
        "derived hyperparameters"
    );

    let table = ResultTable::load(results_dir, scenario)?;
    let grid_svg = render_grid(&table, scenario)?;
    let illustration_svg = render_illustration(&sample)?;

    Ok(ScenarioSection {
        id: scenario.as_str().to_string(),
        title: scenario.title().to_string(),
        narrative: narrative(scenario),
        hyperparams: hyperparam_rows(&params, scenario),
        illustration_svg: Some(illustration_svg),
        grid_svg,
        summary: TableSummary {
            rows: table.len(),
            replicates: table.replicates(),
            alpha_levels: table.alpha_levels().iter().map(|l| l.label()).collect(),
            sample_sizes: table.sample_sizes(),
        },
    })
}

fn hyperparam_rows(params: &HyperParams, scenario: Scenario) -> Vec<HyperparamRow> {
    let mu0 = if params.mu0.len() == 1 {
        "0".to_string()
    } else {
        format!("(0{})", ", 0".repeat(params.mu0.len() - 1))
    };
    let adjusted = scenario.separation().is_some();

    vec![
        HyperparamRow {
            name: "mu_0".to_string(),
            value: mu0,
            note: "prior mean".to_string(),
        },
        HyperparamRow {
            name: "a_x".to_string(),
            value: format!("{:.4}", params.shape),
            note: if adjusted {
                "(p+2)/(2 khat²)".to_string()
            } else {
                "(p+2)/2".to_string()
            },
        },
        HyperparamRow {
            name: "b_x".to_string(),
            value: format!("{:.4}", params.rate),
            note: if adjusted {
                "s² p/(2 khat²)".to_string()
            } else {
                "s² p/2".to_string()
            },
        },
        HyperparamRow {
            name: "c_x".to_string(),
            value: format!("{:.4}", params.concentration),
            note: if adjusted {
                "1/((p+2) khat² − 1)".to_string()
            } else {
                "fixed".to_string()
            },
        },
    ]
}

fn narrative(scenario: Scenario) -> Vec<String> {
    match scenario {
        Scenario::Miller => vec![
            "Observations are drawn independently from a standard normal \
             distribution, so the data form a single cluster. The histogram \
             below shows one illustrative sample of size 200."
                .to_string(),
            "With a fixed concentration parameter the posterior number of \
             clusters stays inflated as the sample grows: spurious small \
             clusters persist at every sample size, and all three point \
             estimates inherit them to varying degrees. Letting the \
             concentration parameter decay proportionally to 1/log(n) pulls \
             every summary toward the single true cluster."
                .to_string(),
        ],
        Scenario::Raj4 => vec![
            "Observations are uniform on the interior of the unit disc: the \
             radius is the square root of a uniform variable and the angle is \
             uniform on [0, 2π). The data again form one cluster, now \
             bivariate, as the scatter below illustrates."
                .to_string(),
            "The disc is far from Gaussian, and the mixture compensates by \
             splitting it. The posterior mode and the MAP partition stay \
             comparatively small, while the Binder partition fragments the \
             disc into the most pieces. Decaying concentration again shrinks \
             all four summaries, though more slowly than in the normal case."
                .to_string(),
        ],
        Scenario::Raj3 => vec![
            "Observations come from an equal-weight mixture of two \
             unit-variance normals with means at −1.01 and +1.01, assigned by \
             a per-observation indicator. The components overlap heavily, as \
             the histogram below shows."
                .to_string(),
            "Two clusters are recoverable but barely separated. The marginal \
             posterior mode finds them most reliably; VI tends to agree, \
             while MAP and especially Binder report extra clusters under \
             fixed concentration. The adaptive choice narrows the gap \
             between the estimators as the sample size grows."
                .to_string(),
        ],
    }
}

/// Summary of one validated result table.
#[derive(Debug, Serialize)]
pub struct CheckEntry {
    /// Scenario identifier.
    pub scenario: String,
    /// Completed runs in the table.
    pub rows: usize,
    /// Distinct replicates.
    pub replicates: usize,
    /// Concentration-level labels, in axis order.
    pub alpha_levels: Vec<String>,
    /// Sample sizes, ascending.
    pub sample_sizes: Vec<u32>,
}

/// Load and validate every selected result table.
pub fn check_tables(results_dir: &Path, scenarios: &[Scenario]) -> Result<Vec<CheckEntry>> {
    scenarios
        .iter()
        .map(|&scenario| {
            let table = ResultTable::load(results_dir, scenario)?;
            Ok(CheckEntry {
                scenario: scenario.as_str().to_string(),
                rows: table.len(),
                replicates: table.replicates(),
                alpha_levels: table.alpha_levels().iter().map(|l| l.label()).collect(),
                sample_sizes: table.sample_sizes(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miller_anchor_hyperparameters() {
        // n = 200, p = 1, standard normal: shape and factor are exact,
        // the rate tracks the unit variance of the seeded sample.
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let sample = generate(Scenario::Miller, 200, &mut rng);
        let summary = SampleSummary::from_rows(&sample.rows).unwrap();
        let params = derive(&summary, None);
        assert_eq!(params.shape, 1.5);
        assert_eq!(params.mu0, vec![0.0]);
        assert_eq!(params.concentration, 0.5);
        assert!((params.rate - 0.5).abs() < 0.2, "rate {}", params.rate);
    }

    #[test]
    fn bimodal_hyperparam_rows_show_the_adjusted_derivations() {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let sample = generate(Scenario::Raj3, 200, &mut rng);
        let summary = SampleSummary::from_rows(&sample.rows).unwrap();
        let params = derive(&summary, Scenario::Raj3.separation());
        let rows = hyperparam_rows(&params, Scenario::Raj3);
        assert_eq!(rows.len(), 4);
        assert!(rows[1].note.contains("khat"));
        assert!(rows[3].note.contains("khat"));
    }

    #[test]
    fn narrative_exists_for_every_scenario() {
        for scenario in Scenario::ALL {
            assert!(!narrative(scenario).is_empty());
        }
    }
}
