//! Loader for precomputed simulation result tables.
//!
//! One JSONL file per scenario, one object per completed MCMC run. The
//! sampler and the loss-minimizing estimators that produced these rows live
//! outside this tool; a missing or malformed table is fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use kc_common::{AlphaLevel, Estimator, Scenario};

use crate::error::{DataError, Result};

/// One completed run: cluster counts under each estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    /// Replicate identifier.
    pub rep: u32,
    /// Concentration-parameter level the run used.
    pub alpha: AlphaLevel,
    /// Sample size of the run.
    pub n: u32,
    /// Marginal posterior mode of the number of clusters.
    pub kmode: u32,
    /// Cluster count of the MAP partition.
    #[serde(rename = "kMAP")]
    pub kmap: u32,
    /// Cluster count of the VI partition.
    #[serde(rename = "kVI")]
    pub kvi: u32,
    /// Cluster count of the Binder partition.
    #[serde(rename = "kBinder")]
    pub kbinder: u32,
}

impl ResultRow {
    /// Cluster count under one estimator.
    pub fn count(&self, estimator: Estimator) -> u32 {
        match estimator {
            Estimator::Mode => self.kmode,
            Estimator::Map => self.kmap,
            Estimator::Vi => self.kvi,
            Estimator::Binder => self.kbinder,
        }
    }

    /// Cluster counts are positive and bounded by the run's sample size.
    fn validate(&self) -> std::result::Result<(), String> {
        for estimator in Estimator::PANEL_ORDER {
            let k = self.count(estimator);
            if k == 0 {
                return Err(format!("{}: cluster count must be positive", estimator.column()));
            }
            if k > self.n {
                return Err(format!(
                    "{}: cluster count {k} exceeds sample size {}",
                    estimator.column(),
                    self.n
                ));
            }
        }
        Ok(())
    }
}

/// Full result table for one scenario.
#[derive(Debug, Clone)]
pub struct ResultTable {
    /// Scenario the table belongs to.
    pub scenario: Scenario,
    /// All completed runs.
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Load `<stem>.jsonl` for the scenario from `dir`.
    pub fn load(dir: &Path, scenario: Scenario) -> Result<Self> {
        let path = dir.join(format!("{}.jsonl", scenario.result_stem()));
        if !path.exists() {
            return Err(DataError::MissingFile(path));
        }
        let file = File::open(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut rows = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DataError::Io {
                path: path.clone(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let row: ResultRow =
                serde_json::from_str(&line).map_err(|source| DataError::MalformedRow {
                    path: path.clone(),
                    line: idx + 1,
                    source,
                })?;
            row.validate().map_err(|detail| DataError::InvalidRow {
                path: path.clone(),
                line: idx + 1,
                detail,
            })?;
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(DataError::EmptyTable(path));
        }

        info!(
            scenario = scenario.as_str(),
            rows = rows.len(),
            "loaded result table"
        );
        Ok(ResultTable { scenario, rows })
    }

    /// Number of runs in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no runs.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct concentration levels, adaptive levels first then ascending.
    pub fn alpha_levels(&self) -> Vec<AlphaLevel> {
        let mut levels: Vec<AlphaLevel> = self.rows.iter().map(|r| r.alpha).collect();
        levels.sort();
        levels.dedup();
        levels
    }

    /// Distinct sample sizes, ascending.
    pub fn sample_sizes(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.rows.iter().map(|r| r.n).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Number of distinct replicates.
    pub fn replicates(&self) -> usize {
        let mut reps: Vec<u32> = self.rows.iter().map(|r| r.rep).collect();
        reps.sort_unstable();
        reps.dedup();
        reps.len()
    }

    /// Cluster counts for one (estimator, level, sample size) cell.
    pub fn counts(&self, estimator: Estimator, alpha: AlphaLevel, n: u32) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|r| r.alpha == alpha && r.n == n)
            .map(|r| f64::from(r.count(estimator)))
            .collect()
    }
}
