//! # Brisket - Exploratory Profiling for Tabular Data
//!
//! Brisket loads one table, profiles it, charts its numeric columns and
//! writes a static report next to the charts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use brisket::{OutputFormat, ProfileOptions, profile};
//! use std::path::Path;
//!
//! # fn example() -> brisket::error::Result<()> {
//! let options = ProfileOptions::new(OutputFormat::Html, "reports");
//! let outcome = profile(Path::new("people.csv"), &options)?;
//!
//! println!("Report: {}", outcome.report_path.display());
//! for col in &outcome.report.missing_values {
//!     println!("{}: {} missing", col.column, col.count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`profiler`]: the pipeline and its individual steps
//!   - [`profiler::io`]: loading CSV, Parquet and JSON into a `DataFrame`
//!   - [`profiler::types`]: shapes, column profiles and the report model
//! - [`charts`]: box plot and distribution grids rendered to SVG
//! - [`report`]: HTML, Markdown and JSON report writers
//! - [`config`]: run configuration with JSON file loading
//! - [`error`]: error types and handling utilities
//! - [`logging`]: console and rolling file logging
//!
//! ## Derived Datasets
//!
//! The loaded `DataFrame` is only ever borrowed. Row deduplication and
//! constant-column removal each build a new frame from it:
//!
//! ```no_run
//! use brisket::profiler::{constant_columns, drop_constant_columns, drop_duplicate_rows};
//! use polars::prelude::*;
//!
//! # fn example() -> brisket::error::Result<()> {
//! let df = df!("id" => [1, 2, 2], "site" => ["a", "a", "a"])?;
//!
//! let deduplicated = drop_duplicate_rows(&df)?;
//! let constant = constant_columns(&df)?;
//! let reduced = drop_constant_columns(&df, &constant);
//!
//! assert_eq!(deduplicated.height(), 2);
//! assert_eq!(reduced.width(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod charts;
pub mod config;
pub mod error;
pub mod logging;
pub mod profiler;
pub mod report;

pub use config::ProfilerConfig;
pub use profiler::{ProfileOptions, profile};
pub use report::OutputFormat;
