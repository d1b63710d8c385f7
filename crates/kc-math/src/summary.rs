//! Per-dimension sample summaries.

use serde::Serialize;

/// Column-wise summary of a row-major n×p sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    /// Number of observations.
    pub rows: usize,
    /// Dimensionality of one observation.
    pub dim: usize,
    /// Per-dimension mean.
    pub mean: Vec<f64>,
    /// Per-dimension unbiased variance.
    pub variance: Vec<f64>,
}

impl SampleSummary {
    /// Summarize a row-major matrix.
    ///
    /// Returns `None` for fewer than two rows (variance undefined) or
    /// ragged rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let n = rows.len();
        if n < 2 {
            return None;
        }
        let dim = rows[0].len();
        if dim == 0 || rows.iter().any(|row| row.len() != dim) {
            return None;
        }

        let mut mean = vec![0.0; dim];
        for row in rows {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n as f64;
        }

        let mut variance = vec![0.0; dim];
        for row in rows {
            for ((s, v), m) in variance.iter_mut().zip(row).zip(&mean) {
                let d = v - m;
                *s += d * d;
            }
        }
        for s in &mut variance {
            *s /= (n - 1) as f64;
        }

        Some(SampleSummary {
            rows: n,
            dim,
            mean,
            variance,
        })
    }

    /// Mean of the per-dimension variances.
    pub fn mean_variance(&self) -> f64 {
        self.variance.iter().sum::<f64>() / self.dim as f64
    }
}
