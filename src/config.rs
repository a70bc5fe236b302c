//! Profiler configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "suppress_warnings": true, "charts": { "max_plotted_columns": 4 } }
//! ```

use crate::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Rows scanned when inferring CSV column types
    pub infer_schema_length: usize,
    /// Parse date-like text columns into temporal dtypes while loading
    pub try_parse_dates: bool,
    /// Silence data-quality warnings for this run only
    pub suppress_warnings: bool,
    pub charts: ChartConfig,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            infer_schema_length: 10_000,
            try_parse_dates: true,
            suppress_warnings: false,
            charts: ChartConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Numeric columns beyond this many (in column order) are not plotted
    pub max_plotted_columns: usize,
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// Canvas size in pixels
    pub width: u32,
    pub height: u32,
    pub max_histogram_bins: usize,
    /// Sample points along the density curve
    pub kde_points: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_plotted_columns: 6,
            grid_rows: 2,
            grid_cols: 3,
            width: 1500,
            height: 1000,
            max_histogram_bins: 50,
            kde_points: 200,
        }
    }
}

impl ChartConfig {
    pub fn cells(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    /// Number of columns that will actually be drawn: the plot limit, further
    /// capped by the number of grid cells.
    pub fn plot_limit(&self) -> usize {
        self.max_plotted_columns.min(self.cells())
    }
}

impl ProfilerConfig {
    /// Load a JSON config file. Missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Config`] if the file cannot be read, is not
    /// valid JSON, or fails [`ProfilerConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProfileError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ProfileError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let charts = &self.charts;
        if charts.grid_rows == 0 || charts.grid_cols == 0 {
            return Err(ProfileError::Config(format!(
                "chart grid must be at least 1x1, got {}x{}",
                charts.grid_rows, charts.grid_cols
            )));
        }
        if charts.max_plotted_columns == 0 {
            return Err(ProfileError::Config(
                "max_plotted_columns must be greater than zero".to_owned(),
            ));
        }
        if charts.width < 100 || charts.height < 100 {
            return Err(ProfileError::Config(format!(
                "chart canvas {}x{} is too small",
                charts.width, charts.height
            )));
        }
        if charts.max_histogram_bins == 0 || charts.kde_points < 2 {
            return Err(ProfileError::Config(
                "histogram bins and density points must be positive".to_owned(),
            ));
        }
        if self.infer_schema_length == 0 {
            return Err(ProfileError::Config(
                "infer_schema_length must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}
