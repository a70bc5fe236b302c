use super::types::{AnalysisReport, ChartArtifacts, ColumnProfile, ProfileOutcome, Shape};
use super::{classify, constant, duplicates, io, missing, profiling};
use crate::charts::{self, BOXPLOTS_FILE, DISTRIBUTIONS_FILE};
use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use crate::report::{self, OutputFormat};
use std::path::{Path, PathBuf};

/// How one profiling run is carried out and where its files go.
#[derive(Debug, Clone)]
pub struct ProfileOptions {
    pub format: OutputFormat,
    /// Directory receiving the two charts and the report. Created if missing.
    pub output_dir: PathBuf,
    pub config: ProfilerConfig,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_dir: PathBuf::from("."),
            config: ProfilerConfig::default(),
        }
    }
}

impl ProfileOptions {
    pub fn new(format: OutputFormat, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            format,
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// Profile the table at `source_path` and write `boxplots.svg`,
/// `distributions.svg` and `data_analysis_report.<ext>` into the output
/// directory, replacing files from an earlier run.
///
/// The format and config are checked and the dataset is loaded before
/// anything is written, so a bad format or unreadable source leaves the
/// output directory untouched. Later failures abort the run and keep
/// whatever was already written.
///
/// # Errors
///
/// - [`ProfileError::Config`] for an invalid config
/// - [`ProfileError::UnsupportedFormat`] for `pdf` and `word`
/// - [`ProfileError::Load`] when the source cannot be read as a table
/// - [`ProfileError::Render`] or [`ProfileError::Write`] while producing output
pub fn profile(source_path: &Path, options: &ProfileOptions) -> Result<ProfileOutcome> {
    let config = &options.config;
    config.validate()?;
    let writer = options.format.writer()?;

    tracing::info!("Profiling {}", source_path.display());
    let df = io::load_dataset(source_path, config)?;
    let original_shape = Shape::of(&df);
    tracing::info!("Loaded dataset with shape {original_shape}");

    let columns = profiling::column_profiles(&df)?;

    let missing_values = missing::missing_values(&df);
    tracing::info!(
        "Missing values: {} cells across {} columns",
        missing::total_missing(&missing_values),
        missing_values.len()
    );
    warn_all_missing(&columns, config);

    let (numeric_columns, categorical_columns) = classify::classify_columns(&df);
    tracing::info!(
        "Numeric columns: {}; categorical columns: {}",
        report::join_or_none(&numeric_columns),
        report::join_or_none(&categorical_columns)
    );

    let duplicated_columns = duplicates::duplicated_columns(&df)?;
    let deduplicated = duplicates::drop_duplicate_rows(&df)?;
    let deduplicated_shape = Shape::of(&deduplicated);
    tracing::info!(
        "Duplicated columns: {}; shape after removing duplicates: {deduplicated_shape}",
        report::join_or_none(&duplicated_columns)
    );

    let constant_columns = constant::constant_columns(&df)?;
    let no_constant = constant::drop_constant_columns(&df, &constant_columns);
    let no_constant_shape = Shape::new(df.height(), no_constant.width());
    tracing::info!(
        "Constant columns: {}; shape after removing constant columns: {no_constant_shape}",
        report::join_or_none(&constant_columns)
    );

    let plotted_columns = select_plotted(&numeric_columns, config);

    std::fs::create_dir_all(&options.output_dir)
        .map_err(|e| ProfileError::write(&options.output_dir, e))?;
    let boxplots_path = options.output_dir.join(BOXPLOTS_FILE);
    let distributions_path = options.output_dir.join(DISTRIBUTIONS_FILE);

    let series = charts::collect_series(&df, &plotted_columns)?;
    charts::render_boxplots(&series, &boxplots_path, &config.charts)?;
    charts::render_distributions(&series, &distributions_path, &config.charts)?;
    tracing::info!(
        "Charted {} numeric columns into {} and {}",
        plotted_columns.len(),
        boxplots_path.display(),
        distributions_path.display()
    );

    let report = AnalysisReport {
        source: source_path.display().to_string(),
        generated_at: chrono::Utc::now(),
        columns,
        missing_values,
        numeric_columns,
        categorical_columns,
        duplicated_columns,
        original_shape,
        deduplicated_shape,
        constant_columns,
        no_constant_shape,
        plotted_columns,
        charts: ChartArtifacts {
            boxplots: PathBuf::from(BOXPLOTS_FILE),
            distributions: PathBuf::from(DISTRIBUTIONS_FILE),
        },
    };

    let report_path = report::write_report(&report, writer.as_ref(), &options.output_dir)?;
    tracing::info!("Report written to {}", report_path.display());

    Ok(ProfileOutcome {
        report,
        report_path,
        boxplots_path,
        distributions_path,
    })
}

/// The first numeric columns that fit the chart grid, in column order.
pub fn select_plotted(numeric: &[String], config: &ProfilerConfig) -> Vec<String> {
    let limit = config.charts.plot_limit();
    if numeric.len() > limit && !config.suppress_warnings {
        tracing::warn!(
            "Only the first {limit} of {} numeric columns are charted; skipped: {}",
            numeric.len(),
            numeric[limit..].join(", ")
        );
    }
    numeric.iter().take(limit).cloned().collect()
}

fn warn_all_missing(columns: &[ColumnProfile], config: &ProfilerConfig) {
    if config.suppress_warnings {
        return;
    }
    for col in columns.iter().filter(|c| c.is_all_missing()) {
        tracing::warn!("Column '{}' has no values in any row", col.name);
    }
}
