//! Box plot and distribution grids for numeric columns.
//!
//! Both charts share one layout: the canvas is split into
//! `grid_rows × grid_cols` cells and the selected columns fill them left to
//! right, top to bottom. Cells without a column stay blank, so a dataset with
//! no numeric columns still yields a valid (empty) image.

pub mod stats;

use crate::config::ChartConfig;
use crate::error::{ProfileError, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use polars::prelude::{DataFrame, Float64Chunked};
use std::path::Path;

pub const BOXPLOTS_FILE: &str = "boxplots.svg";
pub const DISTRIBUTIONS_FILE: &str = "distributions.svg";

const CAPTION_FONT: (&str, u32) = ("sans-serif", 20);

type Cell<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn render_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> ProfileError {
    ProfileError::Render(err.to_string())
}

fn present_err<E: std::error::Error + Send + Sync>(
    path: &Path,
    err: DrawingAreaErrorKind<E>,
) -> ProfileError {
    ProfileError::write(path, std::io::Error::other(err.to_string()))
}

/// Values of each named column, ready to plot.
///
/// # Errors
///
/// Fails if a column is missing or cannot be cast to `Float64`.
pub fn collect_series(df: &DataFrame, columns: &[String]) -> Result<Vec<(String, Float64Chunked)>> {
    columns
        .iter()
        .map(|name| -> Result<(String, Float64Chunked)> {
            let col = df.column(name)?;
            Ok((name.clone(), stats::numeric_values(col)?))
        })
        .collect()
}

/// One box plot per column, written as SVG to `path`.
///
/// # Errors
///
/// [`ProfileError::Render`] when drawing fails, [`ProfileError::Write`] when
/// the file cannot be written.
pub fn render_boxplots(
    series: &[(String, Float64Chunked)],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let cells = root.split_evenly((config.grid_rows, config.grid_cols));
    for (cell, (name, values)) in cells.iter().zip(series) {
        draw_boxplot(cell, name, values)?;
    }

    root.present().map_err(|e| present_err(path, e))?;
    tracing::debug!("Wrote {} box plots to {}", series.len().min(cells.len()), path.display());
    Ok(())
}

/// One histogram with a density curve per column, written as SVG to `path`.
///
/// # Errors
///
/// [`ProfileError::Render`] when drawing fails, [`ProfileError::Write`] when
/// the file cannot be written.
pub fn render_distributions(
    series: &[(String, Float64Chunked)],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let cells = root.split_evenly((config.grid_rows, config.grid_cols));
    for (cell, (name, values)) in cells.iter().zip(series) {
        draw_distribution(cell, name, values, config)?;
    }

    root.present().map_err(|e| present_err(path, e))?;
    tracing::debug!(
        "Wrote {} distribution plots to {}",
        series.len().min(cells.len()),
        path.display()
    );
    Ok(())
}

fn draw_boxplot(cell: &Cell<'_>, name: &str, values: &Float64Chunked) -> Result<()> {
    let title = format!("Box Plot of {name}");
    let Some(summary) = stats::box_summary(values)? else {
        return draw_empty(cell, &title);
    };

    let (lo, hi) = padded_range(summary.extent());
    let mut chart = ChartBuilder::on(cell)
        .caption(&title, CAPTION_FONT)
        .margin(15)
        .x_label_area_size(10)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, lo..hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(name)
        .draw()
        .map_err(render_err)?;

    let (left, centre, right) = (0.3, 0.5, 0.7);
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(left, summary.q1), (right, summary.q3)],
            BLUE.mix(0.35).filled(),
        )))
        .map_err(render_err)?;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(left, summary.q1), (right, summary.q3)],
            BLACK.stroke_width(1),
        )))
        .map_err(render_err)?;

    let cap = (right - left) / 4.0;
    let lines = [
        vec![(left, summary.median), (right, summary.median)],
        vec![(centre, summary.q3), (centre, summary.upper_whisker)],
        vec![(centre, summary.q1), (centre, summary.lower_whisker)],
        vec![
            (centre - cap, summary.upper_whisker),
            (centre + cap, summary.upper_whisker),
        ],
        vec![
            (centre - cap, summary.lower_whisker),
            (centre + cap, summary.lower_whisker),
        ],
    ];
    chart
        .draw_series(
            lines
                .into_iter()
                .map(|points| PathElement::new(points, BLACK.stroke_width(2))),
        )
        .map_err(render_err)?;

    chart
        .draw_series(
            summary
                .outliers
                .iter()
                .map(|&v| Circle::new((centre, v), 3, BLACK.filled())),
        )
        .map_err(render_err)?;

    Ok(())
}

fn draw_distribution(
    cell: &Cell<'_>,
    name: &str,
    values: &Float64Chunked,
    config: &ChartConfig,
) -> Result<()> {
    let title = format!("Distribution of {name}");
    let Some(hist) = stats::histogram(values, config.max_histogram_bins) else {
        return draw_empty(cell, &title);
    };

    let scale = values.len() as f64 * hist.bin_width;
    let curve = stats::kde_curve(values, config.kde_points, scale);
    let curve_peak = curve.iter().map(|&(_, y)| y).fold(0.0, f64::max);
    let y_max = (hist.max_count() as f64).max(curve_peak).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(cell)
        .caption(&title, CAPTION_FONT)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(hist.start..hist.end(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(name)
        .y_desc("Count")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(hist.bins().map(|(x0, x1, count)| {
            Rectangle::new([(x0, 0.0), (x1, count as f64)], BLUE.mix(0.45).filled())
        }))
        .map_err(render_err)?;
    chart
        .draw_series(hist.bins().map(|(x0, x1, count)| {
            Rectangle::new([(x0, 0.0), (x1, count as f64)], WHITE.stroke_width(1))
        }))
        .map_err(render_err)?;

    if !curve.is_empty() {
        chart
            .draw_series(LineSeries::new(curve, BLUE.stroke_width(2)))
            .map_err(render_err)?;
    }

    Ok(())
}

/// A titled cell for a column with no values to plot.
fn draw_empty(cell: &Cell<'_>, title: &str) -> Result<()> {
    let body = cell.titled(title, CAPTION_FONT).map_err(render_err)?;
    let (w, h) = body.dim_in_pixel();
    body.draw(&Text::new(
        "no values",
        (w as i32 / 2 - 30, h as i32 / 2),
        ("sans-serif", 16),
    ))
    .map_err(render_err)?;
    Ok(())
}

fn padded_range((lo, hi): (f64, f64)) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo - span * 0.05, hi + span * 0.05)
    }
}
