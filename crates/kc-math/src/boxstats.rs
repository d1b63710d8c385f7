//! Tukey box-plot statistics.

use serde::Serialize;

/// Five-number summary plus outliers for one box.
///
/// Quartiles use linear interpolation over the order statistics; whiskers
/// sit at the most extreme observations within 1.5·IQR of the box, and
/// anything beyond is an outlier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveNumber {
    /// Lower whisker.
    pub lower: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Upper whisker.
    pub upper: f64,
    /// Observations beyond the whisker fences, sorted ascending.
    pub outliers: Vec<f64>,
}

impl FiveNumber {
    /// Compute the summary; `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;

        // The interpolated quartiles always lie inside the fences, so both
        // searches find at least one observation.
        let lower = sorted
            .iter()
            .copied()
            .find(|v| *v >= lo_fence)
            .unwrap_or(q1);
        let upper = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= hi_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < lo_fence || *v > hi_fence)
            .collect();

        Some(FiveNumber {
            lower,
            q1,
            median,
            q3,
            upper,
            outliers,
        })
    }

    /// Full vertical extent of the drawn box: whiskers and outliers.
    pub fn span(&self) -> (f64, f64) {
        let mut lo = self.lower;
        let mut hi = self.upper;
        for v in &self.outliers {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        (lo, hi)
    }
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    }
}
