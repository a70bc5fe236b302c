//! The profiling pipeline: load a table, profile it, chart it, report it.
//!
//! [`profile`] runs every step in order. The step functions are public on
//! their own so callers can profile a `DataFrame` they already hold.

pub mod classify;
pub mod constant;
pub mod duplicates;
pub mod flow;
pub mod io;
pub mod missing;
pub mod profiling;
pub mod spreadsheet;
pub mod types;

pub use classify::{classify_columns, column_kind};
pub use constant::{constant_columns, drop_constant_columns};
pub use duplicates::{drop_duplicate_rows, duplicated_columns};
pub use flow::{ProfileOptions, profile};
pub use io::load_dataset;
pub use missing::missing_values;
pub use profiling::column_profiles;
pub use types::{
    AnalysisReport, ChartArtifacts, ColumnClass, ColumnKind, ColumnProfile, MissingValue,
    ProfileOutcome, Shape,
};

#[cfg(test)]
mod tests;
