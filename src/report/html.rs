//! HTML rendering of the analysis report.
//!
//! A single self-contained page; the charts are linked by their file names,
//! so the report must stay next to them.

use super::ReportWriter;
use crate::error::Result;
use crate::profiler::types::AnalysisReport;

pub struct HtmlReport;

impl ReportWriter for HtmlReport {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, report: &AnalysisReport) -> Result<String> {
        Ok(render_html(report))
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:2em;max-width:1200px}\
table{border-collapse:collapse;margin-bottom:1em}\
th,td{border:1px solid #ccc;padding:4px 10px;text-align:left}\
th{background:#f0f0f0}img{max-width:100%;border:1px solid #eee}";

pub fn render_html(report: &AnalysisReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Data Analysis Report</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));

    html.push_str("<h1>Data Analysis Report</h1>\n");
    html.push_str(&format!(
        "<p>Source: <code>{}</code><br>Generated: {}</p>\n",
        escape(&report.source),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    html.push_str("<h2>1. Missing Values Analysis</h2>\n");
    if report.missing_values.is_empty() {
        html.push_str("<p>No missing values.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th>Column</th><th>Missing</th></tr></thead>\n<tbody>\n");
        for m in &report.missing_values {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape(&m.column),
                m.count
            ));
        }
        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str("<h2>2. Data Type Analysis</h2>\n");
    html.push_str("<h3>Numeric Columns:</h3>\n");
    html.push_str(&format!("<p>{}</p>\n", name_list(&report.numeric_columns)));
    html.push_str("<h3>Categorical Columns:</h3>\n");
    html.push_str(&format!("<p>{}</p>\n", name_list(&report.categorical_columns)));

    html.push_str("<h2>3. Duplicates Analysis</h2>\n");
    html.push_str(&format!(
        "<p>Duplicated columns: {}</p>\n",
        name_list(&report.duplicated_columns)
    ));
    html.push_str(&format!("<p>Original shape: {}</p>\n", report.original_shape));
    html.push_str(&format!(
        "<p>Shape after removing duplicates: {}</p>\n",
        report.deduplicated_shape
    ));

    html.push_str("<h2>4. Constant Columns Analysis</h2>\n");
    html.push_str(&format!(
        "<p>Constant columns: {}</p>\n",
        name_list(&report.constant_columns)
    ));
    html.push_str(&format!(
        "<p>Shape after removing constant columns: {}</p>\n",
        report.no_constant_shape
    ));

    render_profile_table(&mut html, report);

    html.push_str("<h2>5. Visualizations</h2>\n");
    if report.plotted_columns.is_empty() {
        html.push_str("<p>No numeric columns to plot.</p>\n");
    }
    html.push_str("<h3>Box Plots</h3>\n");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"Box Plots\">\n",
        escape(&report.charts.boxplots.to_string_lossy())
    ));
    html.push_str("<h3>Distributions</h3>\n");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"Distributions\">\n",
        escape(&report.charts.distributions.to_string_lossy())
    ));

    html.push_str("</body>\n</html>\n");
    html
}

fn render_profile_table(html: &mut String, report: &AnalysisReport) {
    html.push_str("<h2>Column Profiles</h2>\n<table>\n<thead><tr>");
    for header in ["Column", "Kind", "Nulls", "Null %", "Distinct", "Repeats", "Constant"] {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for col in &report.columns {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&col.name),
            col.kind.as_str(),
            col.nulls,
            col.null_pct(),
            col.distinct,
            if col.has_duplicates { "yes" } else { "no" },
            if col.is_constant { "yes" } else { "no" },
        ));
    }
    html.push_str("</tbody>\n</table>\n");
}

fn name_list(names: &[String]) -> String {
    escape(&super::join_or_none(names))
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
