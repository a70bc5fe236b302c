use super::ReportWriter;
use crate::error::{ProfileError, Result};
use crate::profiler::types::AnalysisReport;

/// The report as pretty-printed JSON, for feeding other tools.
pub struct JsonReport;

impl ReportWriter for JsonReport {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &AnalysisReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| serialize_err(&e))
    }
}

fn serialize_err(err: &serde_json::Error) -> ProfileError {
    ProfileError::Other(format!("Failed to serialize report as JSON: {err}"))
}
