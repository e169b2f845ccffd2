use std::fmt::Display;
use std::path::Path;

use anyhow::anyhow;
use counting_sort::SweepResults;
use plotters::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;
const CAPTION: &str = "Counting Sort Runtime vs Input Size";

fn draw_err<E: Display>(err: E) -> anyhow::Error {
    anyhow!("chart rendering failed: {err}")
}

/// Axis ranges covering every measured point with a little headroom.
pub fn axis_extent(results: &SweepResults) -> (f64, f64) {
    let points = results.series.iter().flat_map(|s| s.points.iter());
    let (max_n, max_ms) = points.fold((0.0_f64, 0.0_f64), |(n, ms), &(len, t)| {
        (n.max(len as f64), ms.max(t))
    });
    let x = if max_n > 0.0 { max_n * 1.05 } else { 1.0 };
    let y = if max_ms > 0.0 { max_ms * 1.1 } else { 1.0 };
    (x, y)
}

/// One line with circle markers per non-empty series, written as a PNG.
pub fn render_png(results: &SweepResults, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (x_max, y_max) = axis_extent(results);
    let mut chart = ChartBuilder::on(&root)
        .caption(CAPTION, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Input Size (n)")
        .y_desc("Median Runtime (ms)")
        .draw()
        .map_err(draw_err)?;

    for (idx, series) in results.series.iter().enumerate() {
        if series.points.is_empty() {
            continue;
        }
        let color = Palette99::pick(idx).mix(0.9);
        let points = series
            .points
            .iter()
            .map(|&(len, ms)| (len as f64, ms))
            .collect::<Vec<_>>();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(format!("k={}", series.policy))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(draw_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
