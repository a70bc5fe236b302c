//! Markdown rendering of the analysis report.

use super::{ReportWriter, join_or_none};
use crate::error::Result;
use crate::profiler::types::AnalysisReport;

pub struct MarkdownReport;

impl ReportWriter for MarkdownReport {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, report: &AnalysisReport) -> Result<String> {
        Ok(render_markdown(report))
    }
}

pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut md = String::new();

    md.push_str("# Data Analysis Report\n\n");
    md.push_str(&format!("> **Source:** `{}`  \n", report.source));
    md.push_str(&format!(
        "> **Generated:** {}  \n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    // 1. Missing values
    md.push_str("## 1. Missing Values Analysis\n\n");
    if report.missing_values.is_empty() {
        md.push_str("*No missing values.*\n\n");
    } else {
        md.push_str("| Column | Missing |\n|---|---:|\n");
        for m in &report.missing_values {
            md.push_str(&format!("| {} | {} |\n", escape_cell(&m.column), m.count));
        }
        md.push('\n');
    }

    // 2. Types
    md.push_str("## 2. Data Type Analysis\n\n");
    md.push_str("### Numeric Columns\n\n");
    md.push_str(&format!("{}\n\n", join_or_none(&report.numeric_columns)));
    md.push_str("### Categorical Columns\n\n");
    md.push_str(&format!("{}\n\n", join_or_none(&report.categorical_columns)));

    // 3. Duplicates
    md.push_str("## 3. Duplicates Analysis\n\n");
    md.push_str(&format!(
        "**Duplicated columns:** {}  \n",
        join_or_none(&report.duplicated_columns)
    ));
    md.push_str(&format!("**Original shape:** {}  \n", report.original_shape));
    md.push_str(&format!(
        "**Shape after removing duplicates:** {}\n\n",
        report.deduplicated_shape
    ));

    // 4. Constant columns
    md.push_str("## 4. Constant Columns Analysis\n\n");
    md.push_str(&format!(
        "**Constant columns:** {}  \n",
        join_or_none(&report.constant_columns)
    ));
    md.push_str(&format!(
        "**Shape after removing constant columns:** {}\n\n",
        report.no_constant_shape
    ));

    // Column profiles
    md.push_str("## Column Profiles\n\n");
    md.push_str("| Column | Kind | Nulls | Distinct | Repeats | Constant |\n");
    md.push_str("|---|---|---:|---:|:-:|:-:|\n");
    for col in &report.columns {
        md.push_str(&format!(
            "| {} | {} | {} ({:.1}%) | {} | {} | {} |\n",
            escape_cell(&col.name),
            col.kind.as_str(),
            col.nulls,
            col.null_pct(),
            col.distinct,
            yes_no(col.has_duplicates),
            yes_no(col.is_constant),
        ));
    }
    md.push('\n');

    // 5. Visualizations
    md.push_str("## 5. Visualizations\n\n");
    if report.plotted_columns.is_empty() {
        md.push_str("*No numeric columns to plot.*\n\n");
    } else {
        md.push_str(&format!(
            "Plotted columns: {}\n\n",
            report.plotted_columns.join(", ")
        ));
    }
    md.push_str("### Box Plots\n\n");
    md.push_str(&format!(
        "![Box Plots]({})\n\n",
        report.charts.boxplots.display()
    ));
    md.push_str("### Distributions\n\n");
    md.push_str(&format!(
        "![Distributions]({})\n",
        report.charts.distributions.display()
    ));

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
