//! Grouped box-plot grids comparing the four estimators.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use kc_common::{AlphaLevel, Estimator, Scenario};
use kc_data::ResultTable;
use kc_math::FiveNumber;

use crate::error::{PlotError, Result};

const GRID_WIDTH: u32 = 960;
const GRID_HEIGHT: u32 = 780;

// Sequential blues, lighter for smaller sample sizes.
const BOX_FILLS: [RGBColor; 4] = [
    RGBColor(198, 219, 239),
    RGBColor(107, 174, 214),
    RGBColor(33, 113, 181),
    RGBColor(8, 48, 107),
];

fn box_fill(idx: usize) -> RGBColor {
    BOX_FILLS[idx.min(BOX_FILLS.len() - 1)]
}

/// Box statistics for one (concentration level, sample size) cell.
struct PanelCell {
    group: usize,
    size_idx: usize,
    stats: FiveNumber,
}

/// Render the 2×2 comparison grid for one scenario.
///
/// Panels are row-major [marginal posterior mode, MAP, VI, Binder]; within
/// each panel boxes group by concentration level and shade by sample size.
pub fn render_grid(table: &ResultTable, scenario: Scenario) -> Result<String> {
    if table.is_empty() {
        return Err(PlotError::EmptyData(scenario.as_str().to_string()));
    }
    let levels = table.alpha_levels();
    let sizes = table.sample_sizes();
    debug!(
        scenario = scenario.as_str(),
        levels = levels.len(),
        sizes = sizes.len(),
        "rendering comparison grid"
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (GRID_WIDTH, GRID_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(PlotError::backend)?;
        let inner = root
            .titled(scenario.title(), ("sans-serif", 22))
            .map_err(PlotError::backend)?;
        let panels = inner.split_evenly((2, 2));
        for (panel, estimator) in panels.iter().zip(Estimator::PANEL_ORDER) {
            draw_panel(panel, table, estimator, &levels, &sizes)?;
        }
        root.present().map_err(PlotError::backend)?;
    }
    Ok(svg)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &ResultTable,
    estimator: Estimator,
    levels: &[AlphaLevel],
    sizes: &[u32],
) -> Result<()> {
    // One unit of x per concentration level; boxes for each sample size
    // spread inside the unit.
    let groups = levels.len();
    let per_group = sizes.len().max(1);
    let slot = 1.0 / (per_group as f64 + 1.0);
    let box_w = slot * 0.7;

    let mut cells = Vec::new();
    let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
    for (group, level) in levels.iter().enumerate() {
        for (size_idx, &n) in sizes.iter().enumerate() {
            let values = table.counts(estimator, *level, n);
            if let Some(stats) = FiveNumber::compute(&values) {
                let (lo, hi) = stats.span();
                y_min = y_min.min(lo);
                y_max = y_max.max(hi);
                cells.push(PanelCell {
                    group,
                    size_idx,
                    stats,
                });
            }
        }
    }
    if cells.is_empty() {
        return Err(PlotError::EmptyData(format!(
            "{} / {}",
            table.scenario.as_str(),
            estimator.label()
        )));
    }

    let pad = ((y_max - y_min) * 0.08).max(0.5);
    let y_hi = y_max + pad;
    let y_lo = (y_min - pad).max(0.0);
    // Extra band below the data for the group labels.
    let band = (y_hi - y_lo) * 0.14;

    let mut chart = ChartBuilder::on(area)
        .caption(estimator.label(), ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(6)
        .y_label_area_size(38)
        .build_cartesian_2d(0.0..groups as f64, (y_lo - band)..y_hi)
        .map_err(PlotError::backend)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_labels(6)
        .y_desc("clusters")
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .light_line_style(WHITE.mix(0.8))
        .draw()
        .map_err(PlotError::backend)?;

    // Concentration-level labels, centered under each group.
    let label_style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(levels.iter().enumerate().map(|(group, level)| {
            Text::new(
                level.label(),
                (group as f64 + 0.5, y_lo - band * 0.5),
                label_style.clone(),
            )
        }))
        .map_err(PlotError::backend)?;

    let x_of = |cell: &PanelCell| cell.group as f64 + slot * (cell.size_idx as f64 + 1.0);

    for (size_idx, &n) in sizes.iter().enumerate() {
        let fill = box_fill(size_idx);

        // The filled IQR boxes carry the legend entry for this sample size.
        chart
            .draw_series(
                cells
                    .iter()
                    .filter(|c| c.size_idx == size_idx)
                    .map(|cell| {
                        let x = x_of(cell);
                        Rectangle::new(
                            [
                                (x - box_w / 2.0, cell.stats.q1),
                                (x + box_w / 2.0, cell.stats.q3),
                            ],
                            fill.filled(),
                        )
                    }),
            )
            .map_err(PlotError::backend)?
            .label(format!("n = {n}"))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));

        // Outline, median, whiskers and caps.
        chart
            .draw_series(
                cells
                    .iter()
                    .filter(|c| c.size_idx == size_idx)
                    .flat_map(|cell| {
                        let x = x_of(cell);
                        let hw = box_w / 2.0;
                        let cap = box_w * 0.35;
                        let s = &cell.stats;
                        vec![
                            PathElement::new(
                                vec![
                                    (x - hw, s.q1),
                                    (x + hw, s.q1),
                                    (x + hw, s.q3),
                                    (x - hw, s.q3),
                                    (x - hw, s.q1),
                                ],
                                BLACK.stroke_width(1),
                            ),
                            PathElement::new(
                                vec![(x - hw, s.median), (x + hw, s.median)],
                                BLACK.stroke_width(2),
                            ),
                            PathElement::new(vec![(x, s.q3), (x, s.upper)], BLACK.stroke_width(1)),
                            PathElement::new(vec![(x, s.q1), (x, s.lower)], BLACK.stroke_width(1)),
                            PathElement::new(
                                vec![(x - cap, s.upper), (x + cap, s.upper)],
                                BLACK.stroke_width(1),
                            ),
                            PathElement::new(
                                vec![(x - cap, s.lower), (x + cap, s.lower)],
                                BLACK.stroke_width(1),
                            ),
                        ]
                    }),
            )
            .map_err(PlotError::backend)?;

        // Outlier points.
        chart
            .draw_series(
                cells
                    .iter()
                    .filter(|c| c.size_idx == size_idx)
                    .flat_map(|cell| {
                        let x = x_of(cell);
                        cell.stats
                            .outliers
                            .iter()
                            .map(move |v| Circle::new((x, *v), 2, BLACK.filled()))
                            .collect::<Vec<_>>()
                    }),
            )
            .map_err(PlotError::backend)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(PlotError::backend)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kc_data::ResultRow;

    fn synthetic_table() -> ResultTable {
        let mut rows = Vec::new();
        for rep in 1..=10u32 {
            for alpha in [
                AlphaLevel::Adaptive { numerator: 1 },
                AlphaLevel::Fixed(0.5),
                AlphaLevel::Fixed(2.0),
            ] {
                for n in [200u32, 1000] {
                    rows.push(ResultRow {
                        rep,
                        alpha,
                        n,
                        kmode: 1 + rep % 3,
                        kmap: 2 + rep % 4,
                        kvi: 1 + rep % 2,
                        kbinder: 3 + rep % 6,
                    });
                }
            }
        }
        ResultTable {
            scenario: Scenario::Miller,
            rows,
        }
    }

    #[test]
    fn grid_contains_four_panels_in_fixed_order() {
        let svg = render_grid(&synthetic_table(), Scenario::Miller).unwrap();
        assert!(svg.contains("<svg"));

        let mode = svg.find("Marginal posterior mode").unwrap();
        let map = svg.find("MAP").unwrap();
        let vi = svg.find("VI").unwrap();
        let binder = svg.find("Binder").unwrap();
        assert!(mode < map && map < vi && vi < binder);
    }

    #[test]
    fn grid_labels_adaptive_levels_as_fractions() {
        let svg = render_grid(&synthetic_table(), Scenario::Miller).unwrap();
        assert!(svg.contains("1/log(n)"));
        assert!(svg.contains("0.50"));
        assert!(svg.contains("2.00"));
    }

    #[test]
    fn grid_has_one_legend_entry_per_sample_size() {
        let svg = render_grid(&synthetic_table(), Scenario::Miller).unwrap();
        assert!(svg.contains("n = 200"));
        assert!(svg.contains("n = 1000"));
    }

    #[test]
    fn empty_table_is_an_error() {
        let table = ResultTable {
            scenario: Scenario::Raj3,
            rows: Vec::new(),
        };
        assert!(render_grid(&table, Scenario::Raj3).is_err());
    }
}
