use std::path::Path;

use plotters::{
    coord::{
        combinators::{BindKeyPoints, WithKeyPoints},
        types::RangedCoordf64,
    },
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{chart::ChartError, results::ThroughputMatrix};

const SIZE: (u32, u32) = (1600, 1000);
const COLOR_BAR_WIDTH: u32 = 160;
const COLOR_BAR_STEPS: usize = 100;

// Anchors of the yellow-orange-red scale.
const LOW: (u8, u8, u8) = (255, 255, 204);
const MID: (u8, u8, u8) = (253, 141, 60);
const HIGH: (u8, u8, u8) = (189, 0, 38);

pub(super) fn render_error<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}

fn heat_color(fraction: f64) -> RGBColor {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (from, to, local) = if fraction < 0.5 {
        (LOW, MID, fraction * 2.0)
    } else {
        (MID, HIGH, (fraction - 0.5) * 2.0)
    };
    let lerp = |a: u8, b: u8| {
        (a as f64 + (b as f64 - a as f64) * local).round() as u8
    };
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Label for a tick at `position`, empty between cell centres.
fn axis_label(
    axis: &[u64],
    position: f64,
) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    axis.get(index as usize)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Text drawn on a cell; zero cells stay blank.
fn cell_annotation(value: f64) -> Option<String> {
    (value.is_finite() && value > 0.0).then(|| format!("{:.0}", value))
}

/// Vertical position of a grid row, first row at the top.
fn plot_row(
    rows: usize,
    row: usize,
) -> f64 {
    (rows - 1 - row) as f64
}

fn centred_axis(length: usize) -> WithKeyPoints<RangedCoordf64> {
    let key_points = (0..length).map(|index| index as f64).collect();
    (-0.5..length as f64 - 0.5).with_key_points(key_points)
}

pub fn draw(
    path: &Path,
    matrix: &ThroughputMatrix,
) -> Result<(), ChartError> {
    let (rows, columns) = matrix.shape();
    let isl_labels =
        matrix.isl_axis().iter().rev().copied().collect::<Vec<u64>>();
    let osl_axis = matrix.osl_axis();
    let max_value = matrix.max_value();
    let fraction_of_max = |value: f64| {
        if max_value > 0.0 {
            value / max_value
        } else {
            0.0
        }
    };

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;
    let (plot_area, legend_area) =
        root.split_horizontally((SIZE.0 - COLOR_BAR_WIDTH) as i32);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption("Throughput Heatmap", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(centred_axis(columns), centred_axis(rows))
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Output Sequence Length")
        .y_desc("Input Sequence Length")
        .x_label_formatter(&|x: &f64| axis_label(osl_axis, *x))
        .y_label_formatter(&|y: &f64| axis_label(&isl_labels, *y))
        .draw()
        .map_err(render_error)?;

    let cells = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (row, column)))
        .filter_map(|(row, column)| {
            let value = matrix.value(row, column)?;
            Some((plot_row(rows, row), column as f64, value))
        })
        .collect::<Vec<(f64, f64, f64)>>();

    chart
        .draw_series(cells.iter().map(|&(y, x, value)| {
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                heat_color(fraction_of_max(value)).filled(),
            )
        }))
        .map_err(render_error)?;

    let label_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(cells.iter().filter_map(|&(y, x, value)| {
            let annotation = cell_annotation(value)?;
            Some(Text::new(annotation, (x, y), label_style.clone()))
        }))
        .map_err(render_error)?;

    let scale_max = if max_value > 0.0 {
        max_value
    } else {
        1.0
    };
    let mut legend = ChartBuilder::on(&legend_area)
        .margin_top(70)
        .margin_bottom(80)
        .margin_right(20)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..1.0, 0.0..scale_max)
        .map_err(render_error)?;
    legend
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("Throughput (tokens/sec)")
        .draw()
        .map_err(render_error)?;
    legend
        .draw_series((0..COLOR_BAR_STEPS).map(|step| {
            let lower = scale_max * step as f64 / COLOR_BAR_STEPS as f64;
            let upper = scale_max * (step + 1) as f64 / COLOR_BAR_STEPS as f64;
            Rectangle::new(
                [(0.0, lower), (1.0, upper)],
                heat_color(step as f64 / COLOR_BAR_STEPS as f64).filled(),
            )
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
