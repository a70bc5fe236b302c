//! Numbers behind the box plots and distribution charts.
//!
//! Quartiles use linear interpolation. Histogram bin widths follow the
//! `auto` rule: the smaller of the Freedman–Diaconis and Sturges widths. The
//! density curve is a Gaussian KDE with Scott's bandwidth.

use crate::error::Result;
use polars::prelude::*;

/// Non-null, finite values of a column as `f64`.
///
/// # Errors
///
/// Fails if the column cannot be cast to `Float64`.
pub fn numeric_values(col: &Column) -> Result<Float64Chunked> {
    let series = col
        .as_materialized_series()
        .drop_nulls()
        .cast(&DataType::Float64)?;
    let values: Vec<f64> = series
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();
    Ok(Float64Chunked::from_vec(col.name().clone(), values))
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Most extreme observations within 1.5 IQR of the box
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Values outside `(low, high)` are drawn as outliers.
    pub fn fences(&self) -> (f64, f64) {
        let reach = 1.5 * self.iqr();
        (self.q1 - reach, self.q3 + reach)
    }

    /// Lowest and highest point drawn, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        self.outliers.iter().fold(
            (self.lower_whisker, self.upper_whisker),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        )
    }
}

/// # Errors
///
/// Propagates Polars quantile failures.
pub fn box_summary(values: &Float64Chunked) -> Result<Option<BoxSummary>> {
    let (Some(q1), Some(median), Some(q3)) = (
        values.quantile(0.25, QuantileMethod::Linear)?,
        values.median(),
        values.quantile(0.75, QuantileMethod::Linear)?,
    ) else {
        return Ok(None);
    };

    let mut summary = BoxSummary {
        q1,
        median,
        q3,
        lower_whisker: q1,
        upper_whisker: q3,
        outliers: Vec::new(),
    };
    let (low_fence, high_fence) = summary.fences();
    for v in values.into_iter().flatten() {
        if v < low_fence || v > high_fence {
            summary.outliers.push(v);
        } else {
            summary.lower_whisker = summary.lower_whisker.min(v);
            summary.upper_whisker = summary.upper_whisker.max(v);
        }
    }

    Ok(Some(summary))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn end(&self) -> f64 {
        self.start + self.bin_width * self.counts.len() as f64
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(left edge, right edge, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts.iter().enumerate().map(|(i, &count)| {
            let left = self.start + i as f64 * self.bin_width;
            (left, left + self.bin_width, count)
        })
    }
}

pub fn histogram(values: &Float64Chunked, max_bins: usize) -> Option<Histogram> {
    let n = values.len();
    let (min_v, max_v) = (values.min()?, values.max()?);

    let range = max_v - min_v;
    if range.abs() < f64::EPSILON {
        // Single value: one unit-wide bin centred on it
        return Some(Histogram {
            start: min_v - 0.5,
            bin_width: 1.0,
            counts: vec![n],
        });
    }

    let sturges_width = range / ((n as f64).log2() + 1.0);
    let iqr = match (
        values.quantile(0.25, QuantileMethod::Linear),
        values.quantile(0.75, QuantileMethod::Linear),
    ) {
        (Ok(Some(q1)), Ok(Some(q3))) => q3 - q1,
        _ => 0.0,
    };
    let fd_width = 2.0 * iqr / (n as f64).cbrt();
    let width = if fd_width > 0.0 {
        fd_width.min(sturges_width)
    } else {
        sturges_width
    };

    let num_bins = ((range / width).ceil() as usize).clamp(1, max_bins.max(1));
    let bin_width = range / num_bins as f64;

    let mut counts = vec![0; num_bins];
    for v in values.into_iter().flatten() {
        let idx = (((v - min_v) / bin_width).floor() as usize).min(num_bins - 1);
        if let Some(bin) = counts.get_mut(idx) {
            *bin += 1;
        }
    }

    Some(Histogram {
        start: min_v,
        bin_width,
        counts,
    })
}

/// Scott's rule for a one-dimensional Gaussian kernel.
pub fn scott_bandwidth(std_dev: f64, n: usize) -> f64 {
    std_dev * (n as f64).powf(-0.2)
}

/// Gaussian kernel density sampled at `points` positions over the data range,
/// multiplied by `scale` (use `n * bin_width` to overlay on a count
/// histogram). Empty when there are fewer than two values or no spread.
pub fn kde_curve(values: &Float64Chunked, points: usize, scale: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    let (Some(min_v), Some(max_v), Some(std_dev)) = (values.min(), values.max(), values.std(1))
    else {
        return Vec::new();
    };
    if n < 2 || points < 2 || std_dev <= 0.0 || !std_dev.is_finite() {
        return Vec::new();
    }

    let bw = scott_bandwidth(std_dev, n);
    let norm = 1.0 / (n as f64 * bw * (2.0 * std::f64::consts::PI).sqrt());
    let step = (max_v - min_v) / (points - 1) as f64;
    let samples: Vec<f64> = values.into_iter().flatten().collect();

    (0..points)
        .map(|i| {
            let x = min_v + i as f64 * step;
            let density: f64 = samples
                .iter()
                .map(|&xi| {
                    let z = (x - xi) / bw;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}
