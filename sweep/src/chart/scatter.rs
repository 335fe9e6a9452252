use std::path::Path;

use plotters::prelude::*;

use crate::{
    chart::{ChartError, heatmap::render_error},
    results::ScatterPoint,
};

const SIZE: (u32, u32) = (1400, 840);

fn padded(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

pub fn draw(
    path: &Path,
    points: &[ScatterPoint],
) -> Result<(), ChartError> {
    let max_length = points
        .iter()
        .map(|point| point.total_length)
        .max()
        .unwrap_or(0) as f64;
    let max_throughput =
        points.iter().map(|point| point.throughput).fold(0.0, f64::max);

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Throughput vs Total Sequence Length",
            ("sans-serif", 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(
            0.0..padded(max_length),
            0.0..padded(max_throughput),
        )
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .x_desc("Total Sequence Length (ISL + OSL)")
        .y_desc("Throughput (tokens/sec)")
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(points.iter().map(|point| {
            Circle::new(
                (point.total_length as f64, point.throughput),
                5,
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
