use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// `(rows, columns)` of a dataframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn of(df: &DataFrame) -> Self {
        Self::new(df.height(), df.width())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

/// Detailed kind of a column, read from its dtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Text,
    Boolean,
    Temporal,
    /// Null dtype: no values could be typed at all
    Empty,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::Temporal => "Temporal",
            Self::Empty => "Empty",
        }
    }

    /// Every kind other than numeric lands in the categorical bucket.
    pub fn class(self) -> ColumnClass {
        match self {
            Self::Numeric => ColumnClass::Numeric,
            Self::Text | Self::Boolean | Self::Temporal | Self::Empty => ColumnClass::Categorical,
        }
    }
}

/// The two buckets the report partitions columns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnClass {
    Numeric,
    Categorical,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub class: ColumnClass,
    pub count: usize,
    pub nulls: usize,
    /// Distinct non-null values
    pub distinct: usize,
    /// Some value occurs more than once (a repeated null counts)
    pub has_duplicates: bool,
    pub is_constant: bool,
}

impl ColumnProfile {
    pub fn null_pct(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.nulls as f64 / self.count as f64) * 100.0
        }
    }

    pub fn is_all_missing(&self) -> bool {
        self.count > 0 && self.nulls == self.count
    }
}

/// Column name and its null count, for columns with at least one null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingValue {
    pub column: String,
    pub count: usize,
}

/// Paths of the two chart artifacts, relative to the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartArtifacts {
    pub boxplots: PathBuf,
    pub distributions: PathBuf,
}

/// Everything a profiling run found. Built step by step, then handed to a
/// report writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub columns: Vec<ColumnProfile>,
    pub missing_values: Vec<MissingValue>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub duplicated_columns: Vec<String>,
    pub original_shape: Shape,
    pub deduplicated_shape: Shape,
    pub constant_columns: Vec<String>,
    pub no_constant_shape: Shape,
    pub plotted_columns: Vec<String>,
    pub charts: ChartArtifacts,
}

impl AnalysisReport {
    pub fn duplicate_rows_removed(&self) -> usize {
        self.original_shape.rows - self.deduplicated_shape.rows
    }

    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Result of a successful run: the report and every file written.
#[derive(Clone, Debug)]
pub struct ProfileOutcome {
    pub report: AnalysisReport,
    pub report_path: PathBuf,
    pub boxplots_path: PathBuf,
    pub distributions_path: PathBuf,
}
