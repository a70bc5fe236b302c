//! Report writers.
//!
//! A [`ReportWriter`] turns an [`AnalysisReport`] into the text of one file.
//! [`OutputFormat`] picks the writer; formats without one are refused up
//! front with [`ProfileError::UnsupportedFormat`] instead of silently falling
//! back to HTML.

pub mod html;
pub mod json;
pub mod markdown;

use crate::error::{ProfileError, Result};
use crate::profiler::types::AnalysisReport;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use html::HtmlReport;
pub use json::JsonReport;
pub use markdown::MarkdownReport;

/// File name of the report, without extension.
pub const REPORT_STEM: &str = "data_analysis_report";

pub trait ReportWriter {
    /// File extension of the rendered document, without the dot.
    fn extension(&self) -> &'static str;

    /// Render the whole report as one document.
    ///
    /// # Errors
    ///
    /// Writers that serialize structured data may fail on serialization.
    fn render(&self, report: &AnalysisReport) -> Result<String>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    #[value(alias = "md")]
    Markdown,
    Json,
    /// Declared but has no writer
    Pdf,
    /// Declared but has no writer
    #[value(alias = "docx")]
    Word,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Word => "word",
        }
    }

    /// The writer for this format.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnsupportedFormat`] for `pdf` and `word`.
    pub fn writer(self) -> Result<Box<dyn ReportWriter>> {
        match self {
            Self::Html => Ok(Box::new(HtmlReport)),
            Self::Markdown => Ok(Box::new(MarkdownReport)),
            Self::Json => Ok(Box::new(JsonReport)),
            Self::Pdf | Self::Word => Err(ProfileError::UnsupportedFormat(self.as_str().to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "pdf" => Ok(Self::Pdf),
            "word" | "docx" => Ok(Self::Word),
            other => Err(ProfileError::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Path the report will be written to inside `dir`.
pub fn report_path(dir: &Path, writer: &dyn ReportWriter) -> PathBuf {
    dir.join(format!("{REPORT_STEM}.{}", writer.extension()))
}

/// Render `report` and write it into `dir`, replacing any earlier report.
///
/// # Errors
///
/// Rendering failures, or [`ProfileError::Write`] if the file cannot be
/// written.
pub fn write_report(report: &AnalysisReport, writer: &dyn ReportWriter, dir: &Path) -> Result<PathBuf> {
    let path = report_path(dir, writer);
    let content = writer.render(report)?;
    std::fs::write(&path, content).map_err(|e| ProfileError::write(&path, e))?;
    Ok(path)
}

/// Comma-separated names, or `None` for an empty list.
pub(crate) fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_owned()
    } else {
        names.join(", ")
    }
}
