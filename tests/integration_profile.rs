//! Integration tests for the full profiling run
//!
//! These tests profile the fixture files under `testdata/` into a temporary
//! output directory and check the report and the files written.

use anyhow::Result;
use brisket::error::ProfileError;
use brisket::profiler::types::Shape;
use brisket::{OutputFormat, ProfileOptions, ProfilerConfig, profile};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn quiet_options(format: OutputFormat, dir: &Path) -> ProfileOptions {
    let mut options = ProfileOptions::new(format, dir);
    options.config.suppress_warnings = true;
    options
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_profile_people_html() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outcome = profile(&fixture("people.csv"), &quiet_options(OutputFormat::Html, dir.path()))?;
    let report = &outcome.report;

    assert_eq!(report.original_shape, Shape::new(10, 7));
    assert_eq!(report.deduplicated_shape, Shape::new(9, 7));
    assert_eq!(report.duplicate_rows_removed(), 1);
    assert_eq!(report.constant_columns, strings(&["country"]));
    assert_eq!(report.no_constant_shape, Shape::new(10, 6));

    let missing: Vec<(&str, usize)> = report
        .missing_values
        .iter()
        .map(|m| (m.column.as_str(), m.count))
        .collect();
    assert_eq!(missing, vec![("city", 3), ("notes", 10)]);

    assert_eq!(report.numeric_columns, strings(&["id", "age", "salary"]));
    assert_eq!(
        report.categorical_columns,
        strings(&["name", "city", "country", "notes"])
    );
    // Every column repeats a value somewhere, the repeated row included
    assert_eq!(report.duplicated_columns.len(), 7);
    assert_eq!(report.plotted_columns, report.numeric_columns);

    let notes = report.column("notes").ok_or_else(|| anyhow::anyhow!("no notes profile"))?;
    assert!(notes.is_all_missing());
    assert!(!notes.is_constant);

    assert_eq!(outcome.report_path, dir.path().join("data_analysis_report.html"));
    assert_eq!(outcome.boxplots_path, dir.path().join("boxplots.svg"));
    assert_eq!(outcome.distributions_path, dir.path().join("distributions.svg"));

    let html = std::fs::read_to_string(&outcome.report_path)?;
    assert!(html.contains("<p>Original shape: (10, 7)</p>"));
    assert!(html.contains("<p>Shape after removing duplicates: (9, 7)</p>"));
    assert!(html.contains("<p>Shape after removing constant columns: (10, 6)</p>"));
    assert!(html.contains("src=\"boxplots.svg\""));

    let boxplots = std::fs::read_to_string(&outcome.boxplots_path)?;
    assert!(boxplots.contains("Box Plot of salary"));
    let distributions = std::fs::read_to_string(&outcome.distributions_path)?;
    assert!(distributions.contains("Distribution of age"));
    Ok(())
}

#[test]
fn test_profile_markdown_and_json_reports() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let md = profile(&fixture("people.csv"), &quiet_options(OutputFormat::Markdown, dir.path()))?;
    assert_eq!(md.report_path, dir.path().join("data_analysis_report.md"));
    let content = std::fs::read_to_string(&md.report_path)?;
    assert!(content.starts_with("# Data Analysis Report"));
    assert!(content.contains("**Original shape:** (10, 7)"));

    let json = profile(&fixture("people.csv"), &quiet_options(OutputFormat::Json, dir.path()))?;
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json.report_path)?)?;
    assert_eq!(value["original_shape"]["rows"], 10);
    assert_eq!(value["constant_columns"][0], "country");
    Ok(())
}

#[test]
fn test_only_first_six_numeric_columns_are_charted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outcome = profile(
        &fixture("wide_numeric.csv"),
        &quiet_options(OutputFormat::Html, dir.path()),
    )?;
    let report = &outcome.report;

    assert_eq!(report.numeric_columns.len(), 8);
    assert_eq!(report.plotted_columns, strings(&["n1", "n2", "n3", "n4", "n5", "n6"]));

    for path in [&outcome.boxplots_path, &outcome.distributions_path] {
        let svg = std::fs::read_to_string(path)?;
        assert!(svg.contains("of n6"));
        assert!(!svg.contains("of n7"));
        assert!(!svg.contains("of n8"));
    }
    Ok(())
}

#[test]
fn test_no_numeric_columns_still_writes_charts() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outcome = profile(&fixture("text_only.csv"), &quiet_options(OutputFormat::Html, dir.path()))?;

    assert!(outcome.report.numeric_columns.is_empty());
    assert!(outcome.report.plotted_columns.is_empty());
    assert_eq!(outcome.report.categorical_columns.len(), 3);
    assert!(std::fs::read_to_string(&outcome.boxplots_path)?.contains("<svg"));
    assert!(std::fs::read_to_string(&outcome.distributions_path)?.contains("<svg"));
    assert!(outcome.report_path.exists());
    Ok(())
}

#[test]
fn test_missing_source_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out");

    let err = profile(&dir.path().join("absent.csv"), &quiet_options(OutputFormat::Html, &out))
        .err()
        .ok_or_else(|| anyhow::anyhow!("profiling a missing file succeeded"))?;

    assert!(err.is_load(), "unexpected error: {err}");
    assert!(!out.exists());
    Ok(())
}

#[test]
fn test_pdf_and_word_are_rejected_before_loading() -> Result<()> {
    for format in [OutputFormat::Pdf, OutputFormat::Word] {
        let dir = tempfile::tempdir()?;
        let result = profile(&fixture("people.csv"), &quiet_options(format, dir.path()));

        assert!(matches!(result, Err(ProfileError::UnsupportedFormat(_))));
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    }
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut options = quiet_options(OutputFormat::Html, dir.path());
    options.config.charts.grid_cols = 0;

    let result = profile(&fixture("people.csv"), &options);
    assert!(matches!(result, Err(ProfileError::Config(_))));
    Ok(())
}

#[test]
fn test_config_file_narrows_the_grid() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("brisket.json");
    std::fs::write(
        &config_path,
        r#"{ "suppress_warnings": true, "charts": { "grid_rows": 1, "grid_cols": 2 } }"#,
    )?;

    let options = ProfileOptions {
        format: OutputFormat::Html,
        output_dir: dir.path().join("charts"),
        config: ProfilerConfig::load(&config_path)?,
    };
    let outcome = profile(&fixture("wide_numeric.csv"), &options)?;

    assert_eq!(outcome.report.plotted_columns, strings(&["n1", "n2"]));
    assert!(outcome.boxplots_path.starts_with(dir.path().join("charts")));
    Ok(())
}

#[test]
fn test_profile_parquet_source() -> Result<()> {
    use polars::prelude::ParquetWriter;

    let dir = tempfile::tempdir()?;
    let source = dir.path().join("sales.parquet");
    let mut df = polars::df!(
        "region" => ["north", "south", "north", "north"],
        "units" => [3i64, 5, 3, 8],
        "price" => [2.5f64, 2.5, 2.5, 2.5],
    )?;
    ParquetWriter::new(std::fs::File::create(&source)?).finish(&mut df)?;

    let outcome = profile(&source, &quiet_options(OutputFormat::Json, dir.path()))?;
    assert_eq!(outcome.report.original_shape, Shape::new(4, 3));
    assert_eq!(outcome.report.constant_columns, strings(&["price"]));
    assert_eq!(outcome.report.numeric_columns, strings(&["units", "price"]));
    Ok(())
}

#[test]
fn test_profile_excel_workbook() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outcome = profile(&fixture("people.xlsx"), &quiet_options(OutputFormat::Json, dir.path()))?;
    let report = &outcome.report;

    assert_eq!(report.original_shape, Shape::new(4, 6));
    assert_eq!(report.deduplicated_shape, Shape::new(3, 6));
    assert_eq!(report.constant_columns, strings(&["site"]));
    assert_eq!(report.no_constant_shape, Shape::new(4, 5));

    let missing: Vec<(&str, usize)> = report
        .missing_values
        .iter()
        .map(|m| (m.column.as_str(), m.count))
        .collect();
    assert_eq!(missing, vec![("score", 2), ("note", 4)]);

    assert_eq!(report.numeric_columns, strings(&["id", "score"]));
    assert_eq!(
        report.categorical_columns,
        strings(&["name", "flag", "site", "note"])
    );
    let note = report.column("note").ok_or_else(|| anyhow::anyhow!("no note profile"))?;
    assert!(note.is_all_missing());
    assert!(!note.is_constant);
    Ok(())
}

#[test]
fn test_corrupt_sources_fail_to_load_and_write_nothing() -> Result<()> {
    for name in ["broken.parquet", "broken.xlsx"] {
        let dir = tempfile::tempdir()?;
        let source = dir.path().join(name);
        std::fs::write(&source, b"\x00\x01 definitely not a table")?;
        let out = dir.path().join("out");

        let err = profile(&source, &quiet_options(OutputFormat::Html, &out))
            .err()
            .ok_or_else(|| anyhow::anyhow!("profiling {name} succeeded"))?;

        assert!(err.is_load(), "{name}: unexpected error: {err}");
        assert!(!out.exists(), "{name}: output directory was created");
    }
    Ok(())
}
