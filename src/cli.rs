use anyhow::{Context as _, Result};
use brisket::report::OutputFormat;
use brisket::{ProfileOptions, ProfilerConfig, logging, profile};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brisket", about = "Exploratory profiling for tabular datasets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a dataset and write charts plus a report
    Analyze {
        /// Path to the dataset (CSV, TSV, Parquet, JSON or JSON lines)
        file: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Directory for the charts and the report
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Path to a JSON profiler configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Chart at most this many numeric columns
        #[arg(long)]
        max_plots: Option<usize>,

        /// Do not log data-quality warnings
        #[arg(long)]
        quiet_warnings: bool,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            format,
            output_dir,
            config,
            max_plots,
            quiet_warnings,
        } => handle_analyze(
            &file,
            format,
            output_dir,
            config.as_deref(),
            max_plots,
            quiet_warnings,
        ),
    }
}

fn handle_analyze(
    file: &Path,
    format: OutputFormat,
    output_dir: PathBuf,
    config_path: Option<&Path>,
    max_plots: Option<usize>,
    quiet_warnings: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ProfilerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ProfilerConfig::default(),
    };
    if let Some(n) = max_plots {
        config.charts.max_plotted_columns = n;
    }
    if quiet_warnings {
        config.suppress_warnings = true;
    }

    let options = ProfileOptions {
        format,
        output_dir,
        config,
    };
    let outcome = profile(file, &options)
        .with_context(|| format!("Failed to profile {}", file.display()))?;

    let report = &outcome.report;
    println!(
        "Profiled {}: shape {}, {} duplicate rows, {} constant columns",
        report.source,
        report.original_shape,
        report.duplicate_rows_removed(),
        report.constant_columns.len()
    );
    println!("Box plots:     {}", outcome.boxplots_path.display());
    println!("Distributions: {}", outcome.distributions_path.display());
    println!("Report:        {}", outcome.report_path.display());
    if let Ok(log_path) = logging::get_current_log_path() {
        println!("Log file:      {}", log_path.display());
    }
    Ok(())
}
