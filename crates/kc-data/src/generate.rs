//! Illustrative sample generators for the three scenarios.
//!
//! Pure randomized generation with no error conditions; a seeded rng makes
//! the draws reproducible. The samples are not fed into any estimator.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use kc_common::scenario::BIMODAL_SEPARATION;
use kc_common::Scenario;

/// Row-major n×p sample drawn from a scenario's generative law.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Scenario the sample was drawn under.
    pub scenario: Scenario,
    /// Observations, one inner vector per row.
    pub rows: Vec<Vec<f64>>,
}

impl Sample {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sample holds no observations.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dimensionality of one observation.
    pub fn dim(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Values of one coordinate across all rows.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(j).copied())
            .collect()
    }
}

/// Draw n observations from the scenario's generative law.
pub fn generate<R: Rng + ?Sized>(scenario: Scenario, n: usize, rng: &mut R) -> Sample {
    let rows = match scenario {
        Scenario::Miller => standard_normal(n, rng),
        Scenario::Raj4 => unit_disc(n, rng),
        Scenario::Raj3 => bimodal(n, rng),
    };
    Sample { scenario, rows }
}

fn standard_normal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| {
            let x: f64 = StandardNormal.sample(rng);
            vec![x]
        })
        .collect()
}

/// Uniform on the interior of the unit disc: radius sqrt(U1), angle 2πU2.
fn unit_disc<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| {
            let r = rng.random::<f64>().sqrt();
            let theta = 2.0 * PI * rng.random::<f64>();
            vec![r * theta.cos(), r * theta.sin()]
        })
        .collect()
}

/// Equal-weight mixture of unit-variance normals at ±`BIMODAL_SEPARATION`,
/// assigned by a Bernoulli indicator per observation.
fn bimodal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| {
            let shift = if rng.random_bool(0.5) {
                BIMODAL_SEPARATION
            } else {
                -BIMODAL_SEPARATION
            };
            let x: f64 = StandardNormal.sample(rng);
            vec![x + shift]
        })
        .collect()
}
