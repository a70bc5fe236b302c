//! Logging setup for the brisket binary.
//!
//! Library code only emits `tracing` events. [`init`] installs a subscriber
//! that prints them to the console and, when the platform data directory is
//! available, also appends them to a daily rolling file.
//!
//! ```no_run
//! brisket::logging::init().expect("Failed to initialize logging");
//! tracing::info!("Profiling started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/brisket/logs`
/// - macOS: `~/Library/Application Support/brisket/logs`
/// - Linux: `~/.local/share/brisket/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    let log_dir = base_dir.join("brisket").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

fn file_appender() -> Result<(PathBuf, RollingFileAppender)> {
    let log_dir = get_log_dir()?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("brisket")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create file appender")?;
    Ok((log_dir, appender))
}

/// Installs the global subscriber. Defaults to `info`; `RUST_LOG` overrides.
///
/// A missing or unwritable data directory only disables the file log.
///
/// # Errors
///
/// Returns error if the `RUST_LOG` filter cannot be parsed.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let (log_dir, file_layer) = match file_appender() {
        Ok((dir, appender)) => {
            let layer = fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false)
                .with_writer(appender);
            (Some(dir), Some(layer))
        }
        Err(err) => {
            eprintln!("File logging disabled: {err:#}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Logging initialized, log directory: {}", dir.display());
    }

    Ok(())
}

/// Gets the path to today's log file
pub fn get_current_log_path() -> Result<PathBuf> {
    let log_dir = get_log_dir()?;
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    Ok(log_dir.join(format!("brisket.{today}.log")))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_current_log_path_is_in_log_dir() {
        let Ok(log_dir) = get_log_dir() else {
            // No data directory on this machine
            return;
        };
        assert!(log_dir.ends_with("brisket/logs") || log_dir.ends_with("brisket\\logs"));
        let current = get_current_log_path().unwrap();
        assert!(current.starts_with(&log_dir));
        assert!(current.to_string_lossy().ends_with(".log"));
    }
}
