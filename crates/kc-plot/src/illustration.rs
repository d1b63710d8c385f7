//! Per-scenario illustrative figures for the generated samples.

use std::f64::consts::PI;

use plotters::coord::Shift;
use plotters::prelude::*;

use kc_common::Scenario;
use kc_data::Sample;

use crate::error::{PlotError, Result};

const HIST_SIZE: (u32, u32) = (560, 400);
const DISC_SIZE: (u32, u32) = (430, 430);
const HIST_BINS: usize = 24;

/// Render the scenario's illustrative figure: a histogram for the
/// univariate scenarios, a scatter with the unit-circle outline for the
/// disc.
pub fn render_illustration(sample: &Sample) -> Result<String> {
    if sample.is_empty() {
        return Err(PlotError::EmptyData(sample.scenario.as_str().to_string()));
    }
    let size = match sample.scenario {
        Scenario::Raj4 => DISC_SIZE,
        _ => HIST_SIZE,
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(PlotError::backend)?;
        match sample.scenario {
            Scenario::Raj4 => draw_disc(&root, sample)?,
            _ => draw_histogram(&root, sample)?,
        }
        root.present().map_err(PlotError::backend)?;
    }
    Ok(svg)
}

fn draw_histogram<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, sample: &Sample) -> Result<()> {
    let values = sample.column(0);
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = ((hi - lo) / HIST_BINS as f64).max(f64::EPSILON);

    let mut counts = vec![0usize; HIST_BINS];
    for v in &values {
        let idx = (((v - lo) / width) as usize).min(HIST_BINS - 1);
        counts[idx] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(sample.scenario.title(), ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(lo..hi, 0.0..peak * 1.1)
        .map_err(PlotError::backend)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("count")
        .light_line_style(WHITE.mix(0.8))
        .draw()
        .map_err(PlotError::backend)?;

    chart
        .draw_series((0..HIST_BINS).map(|i| {
            let x0 = lo + i as f64 * width;
            let bar = RGBColor(107, 174, 214);
            Rectangle::new([(x0, 0.0), (x0 + width, counts[i] as f64)], bar.mix(0.8).filled())
        }))
        .map_err(PlotError::backend)?;
    chart
        .draw_series((0..HIST_BINS).map(|i| {
            let x0 = lo + i as f64 * width;
            Rectangle::new(
                [(x0, 0.0), (x0 + width, counts[i] as f64)],
                BLACK.mix(0.4),
            )
        }))
        .map_err(PlotError::backend)?;

    Ok(())
}

fn draw_disc<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, sample: &Sample) -> Result<()> {
    let mut chart = ChartBuilder::on(root)
        .caption(sample.scenario.title(), ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(36)
        .build_cartesian_2d(-1.15..1.15, -1.15..1.15)
        .map_err(PlotError::backend)?;

    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(5)
        .light_line_style(WHITE.mix(0.8))
        .draw()
        .map_err(PlotError::backend)?;

    let outline: Vec<(f64, f64)> = (0..=360)
        .map(|deg| {
            let t = f64::from(deg) * PI / 180.0;
            (t.cos(), t.sin())
        })
        .collect();
    chart
        .draw_series(std::iter::once(PathElement::new(outline, BLACK.mix(0.6))))
        .map_err(PlotError::backend)?;

    chart
        .draw_series(sample.rows.iter().filter_map(|row| {
            match (row.first(), row.get(1)) {
                (Some(&x), Some(&y)) => {
                    Some(Circle::new((x, y), 2, RGBAColor(70, 130, 180, 0.6).filled()))
                }
                _ => None,
            }
        }))
        .map_err(PlotError::backend)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kc_data::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn histogram_for_univariate_scenarios() {
        let mut rng = StdRng::seed_from_u64(7);
        for scenario in [Scenario::Miller, Scenario::Raj3] {
            let sample = generate(scenario, 200, &mut rng);
            let svg = render_illustration(&sample).unwrap();
            assert!(svg.contains("<svg"));
            assert!(svg.contains(scenario.title()));
        }
    }

    #[test]
    fn scatter_for_the_disc_scenario() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = generate(Scenario::Raj4, 200, &mut rng);
        let svg = render_illustration(&sample).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("circle"));
    }

    #[test]
    fn empty_sample_is_an_error() {
        let sample = Sample {
            scenario: Scenario::Miller,
            rows: Vec::new(),
        };
        assert!(render_illustration(&sample).is_err());
    }
}
