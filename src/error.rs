//! Error handling for profiling runs.
//!
//! Every step of a run returns [`Result`], whose error side is
//! [`ProfileError`]. The variants mirror the failure points of the pipeline:
//!
//! - [`ProfileError::Load`]: the source could not be read as a table. Raised
//!   before anything is written.
//! - [`ProfileError::Render`]: a chart could not be drawn.
//! - [`ProfileError::Write`]: an artifact could not be written to disk.
//! - [`ProfileError::UnsupportedFormat`]: a report format with no writer.
//!
//! Library errors convert through `From`, so `?` works on polars, I/O and
//! JSON results:
//!
//! ```no_run
//! use brisket::error::{Result, ResultExt as _};
//!
//! fn read_notes(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).context("Failed to read notes")
//! }
//! ```
//!
//! The binary wraps these in `anyhow` at the top level.

use std::fmt;
use std::path::PathBuf;

/// Main error type for profiling operations.
#[derive(Debug)]
pub enum ProfileError {
    /// Source file missing, unreadable, or not parseable as a table
    Load(String),

    /// Chart drawing failures
    Render(String),

    /// An output artifact could not be written
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Requested report format has no writer
    UnsupportedFormat(String),

    /// Invalid configuration values or config file
    Config(String),

    /// Dataframe operations failing after load (Polars)
    DataProcessing(String),

    /// Other I/O errors
    Io(std::io::Error),

    /// Generic error with context
    Other(String),
}

impl ProfileError {
    /// True when the failure happened while reading the source dataset.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(msg) => write!(f, "Failed to load dataset: {msg}"),
            Self::Render(msg) => write!(f, "Chart rendering error: {msg}"),
            Self::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
            Self::UnsupportedFormat(fmt_name) => {
                write!(f, "Report format '{fmt_name}' is not supported")
            }
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for ProfileError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ProfileError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: ProfileError = e.into();
            ProfileError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: ProfileError = e.into();
            ProfileError::Other(format!("{}: {}", f(), err))
        })
    }
}
