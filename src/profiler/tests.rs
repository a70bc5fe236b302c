#![expect(clippy::unwrap_used)]
use super::*;
use crate::config::ProfilerConfig;
use crate::error::Result;
use polars::prelude::*;

fn people() -> PolarsResult<DataFrame> {
    df!(
        "id" => [1i64, 2, 3, 4, 5],
        "name" => [Some("Ann"), Some("Bob"), None, Some("Dee"), Some("Bob")],
        "score" => [Some(9.5), None, None, Some(7.0), Some(8.25)],
        "team" => ["red", "red", "red", "red", "red"],
    )
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_missing_values_lists_only_columns_with_nulls() -> Result<()> {
    let df = people()?;
    let missing = missing_values(&df);

    assert_eq!(
        missing,
        vec![
            MissingValue {
                column: "name".to_owned(),
                count: 1
            },
            MissingValue {
                column: "score".to_owned(),
                count: 2
            },
        ]
    );
    assert_eq!(super::missing::total_missing(&missing), 3);
    Ok(())
}

#[test]
fn test_fully_missing_column_is_reported_and_categorical() -> Result<()> {
    let df = df!(
        "a" => [1i64, 2, 3, 4, 5],
        "b" => ["x", "y", "z", "x", "y"],
        "empty" => [None::<&str>, None, None, None, None],
    )?;

    let missing = missing_values(&df);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].column, "empty");
    assert_eq!(missing[0].count, 5);

    let (numeric, categorical) = classify_columns(&df);
    assert_eq!(numeric, names(&["a"]));
    assert_eq!(categorical, names(&["b", "empty"]));
    Ok(())
}

#[test]
fn test_classification_partitions_every_column() -> Result<()> {
    let df = df!(
        "int" => [1i32, 2],
        "float" => [1.5f64, 2.5],
        "text" => ["a", "b"],
        "flag" => [true, false],
    )?;
    let df = df
        .lazy()
        .with_column(col("int").cast(DataType::Date).alias("day"))
        .collect()?;

    let (numeric, categorical) = classify_columns(&df);
    assert_eq!(numeric, names(&["int", "float"]));
    assert_eq!(categorical, names(&["text", "flag", "day"]));
    assert_eq!(numeric.len() + categorical.len(), df.width());
    assert!(numeric.iter().all(|n| !categorical.contains(n)));

    assert_eq!(column_kind(&DataType::Boolean), ColumnKind::Boolean);
    assert_eq!(column_kind(&DataType::Date), ColumnKind::Temporal);
    assert_eq!(column_kind(&DataType::Null), ColumnKind::Empty);
    assert_eq!(column_kind(&DataType::Int8), ColumnKind::Numeric);
    Ok(())
}

#[test]
fn test_duplicated_columns_is_a_per_column_check() -> Result<()> {
    let df = people()?;
    // id is all distinct; name repeats "Bob"; score repeats null; team repeats "red"
    assert_eq!(
        duplicated_columns(&df)?,
        names(&["name", "score", "team"])
    );

    let distinct = df!("a" => [1, 2, 3], "b" => [1, 2, 3])?;
    assert!(duplicated_columns(&distinct)?.is_empty());
    Ok(())
}

#[test]
fn test_duplicates_iff_distinct_below_row_count() -> Result<()> {
    let df = people()?;
    for col in df.get_columns() {
        let distinct = col.as_materialized_series().n_unique()?;
        assert_eq!(
            super::duplicates::has_repeated_values(col)?,
            distinct < df.height(),
            "column {}",
            col.name()
        );
    }
    Ok(())
}

#[test]
fn test_drop_duplicate_rows_removes_one_repeat() -> Result<()> {
    let df = df!(
        "a" => [1, 2, 3, 2],
        "b" => ["x", "y", "z", "y"],
    )?;
    let deduplicated = drop_duplicate_rows(&df)?;

    assert_eq!(Shape::of(&df), Shape::new(4, 2));
    assert_eq!(Shape::of(&deduplicated), Shape::new(3, 2));
    let a: Vec<Option<i32>> = deduplicated
        .column("a")?
        .as_materialized_series()
        .i32()?
        .into_iter()
        .collect();
    assert_eq!(a, vec![Some(1), Some(2), Some(3)]);
    Ok(())
}

#[test]
fn test_drop_duplicate_rows_is_idempotent() -> Result<()> {
    let df = df!(
        "a" => [Some(1), None, Some(1), None, Some(2)],
        "b" => [Some("x"), None, Some("x"), None, Some("x")],
    )?;
    let once = drop_duplicate_rows(&df)?;
    let twice = drop_duplicate_rows(&once)?;

    assert!(once.height() <= df.height());
    assert_eq!(once.height(), 3);
    assert!(once.equals_missing(&twice));
    assert_eq!(once.get_column_names(), df.get_column_names());
    Ok(())
}

#[test]
fn test_rows_differing_in_one_column_are_kept() -> Result<()> {
    let df = df!("a" => [1, 1], "b" => ["x", "y"])?;
    assert_eq!(drop_duplicate_rows(&df)?.height(), 2);
    Ok(())
}

#[test]
fn test_constant_column_detection_and_removal() -> Result<()> {
    let df = people()?;
    let constant = constant_columns(&df)?;
    assert_eq!(constant, names(&["team"]));

    let reduced = drop_constant_columns(&df, &constant);
    assert_eq!(reduced.height(), df.height());
    assert_eq!(reduced.width(), df.width() - 1);
    let kept: Vec<&str> = reduced
        .get_column_names()
        .into_iter()
        .map(|n| n.as_str())
        .collect();
    assert_eq!(kept, vec!["id", "name", "score"]);
    Ok(())
}

#[test]
fn test_all_null_column_is_not_constant() -> Result<()> {
    let df = df!(
        "empty" => [None::<i64>, None, None],
        "one_value" => [Some(4i64), None, Some(4)],
    )?;
    assert_eq!(constant_columns(&df)?, names(&["one_value"]));
    assert_eq!(super::constant::distinct_non_null(df.column("empty")?)?, 0);
    Ok(())
}

#[test]
fn test_constant_removal_keeps_varying_columns() -> Result<()> {
    let df = df!(
        "a" => [1, 2, 1],
        "b" => ["k", "k", "k"],
        "c" => [Some(0.5), Some(0.5), None],
    )?;
    let constant = constant_columns(&df)?;
    let reduced = drop_constant_columns(&df, &constant);

    for col in df.get_columns() {
        let distinct = super::constant::distinct_non_null(col)?;
        let kept = reduced.column(col.name().as_str()).is_ok();
        assert_eq!(kept, !constant.contains(&col.name().to_string()));
        if distinct >= 2 {
            assert!(kept, "{} has {distinct} values", col.name());
        }
    }
    Ok(())
}

#[test]
fn test_column_profiles() -> Result<()> {
    let profiles = column_profiles(&people()?)?;
    assert_eq!(profiles.len(), 4);

    let score = &profiles[2];
    assert_eq!(score.name, "score");
    assert_eq!(score.kind, ColumnKind::Numeric);
    assert_eq!(score.class, ColumnClass::Numeric);
    assert_eq!(score.nulls, 2);
    assert_eq!(score.distinct, 3);
    assert!(score.has_duplicates);
    assert!((score.null_pct() - 40.0).abs() < 1e-9);

    let team = &profiles[3];
    assert!(team.is_constant);
    assert_eq!(team.class, ColumnClass::Categorical);
    assert!(!team.is_all_missing());
    Ok(())
}

#[test]
fn test_only_the_first_numeric_columns_are_plotted() {
    let numeric: Vec<String> = (1..=8).map(|i| format!("n{i}")).collect();
    let plotted = super::flow::select_plotted(&numeric, &ProfilerConfig::default());
    assert_eq!(plotted, numeric[..6].to_vec());

    let mut config = ProfilerConfig::default();
    config.charts.grid_rows = 1;
    config.charts.grid_cols = 2;
    config.suppress_warnings = true;
    assert_eq!(super::flow::select_plotted(&numeric, &config), names(&["n1", "n2"]));

    assert!(super::flow::select_plotted(&[], &config).is_empty());
}

#[test]
fn test_normalise_missing_blanks_and_nan() -> Result<()> {
    let df = df!(
        "text" => [Some("a"), Some(""), Some("   "), None],
        "n" => [1, 2, 3, 4],
        "x" => [Some(1.0f64), Some(f64::NAN), Some(1.0), None],
    )?;
    let cleaned = super::io::normalise_missing(df)?;
    assert_eq!(cleaned.column("text")?.null_count(), 3);
    assert_eq!(cleaned.column("n")?.null_count(), 0);
    assert_eq!(cleaned.column("x")?.null_count(), 2);
    assert_eq!(super::constant::distinct_non_null(cleaned.column("x")?)?, 1);
    Ok(())
}

#[test]
fn test_csv_nan_is_missing_and_column_is_constant() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nan.csv");
    std::fs::write(&path, "a\n1.0\nNaN\n1.0\n")?;

    let df = load_dataset(&path, &ProfilerConfig::default())?;
    assert_eq!(df.column("a")?.null_count(), 1);
    assert!(df.column("a")?.dtype().is_primitive_numeric());
    assert_eq!(constant_columns(&df)?, names(&["a"]));
    Ok(())
}

#[test]
fn test_csv_na_token_keeps_column_numeric() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("na.csv");
    std::fs::write(&path, "x,y\n1,a\nNA,b\n3,N/A\n")?;

    let df = load_dataset(&path, &ProfilerConfig::default())?;
    assert!(df.column("x")?.dtype().is_primitive_numeric());
    assert_eq!(df.column("x")?.null_count(), 1);
    assert_eq!(df.column("y")?.null_count(), 1);

    let (numeric, categorical) = classify_columns(&df);
    assert_eq!(numeric, names(&["x"]));
    assert_eq!(categorical, names(&["y"]));
    Ok(())
}

#[test]
fn test_load_dataset_rejects_corrupt_parquet() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.parquet");
    std::fs::write(&path, b"this is not a parquet file")?;

    let err = load_dataset(&path, &ProfilerConfig::default()).unwrap_err();
    assert!(err.is_load(), "unexpected error: {err}");
    Ok(())
}

#[test]
fn test_load_dataset_rejects_unknown_extension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("table.xyz");
    std::fs::write(&path, "a,b\n1,2\n")?;

    let err = load_dataset(&path, &ProfilerConfig::default()).unwrap_err();
    assert!(err.is_load());
    Ok(())
}

#[test]
fn test_load_dataset_reads_csv_and_tsv() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let csv = dir.path().join("t.csv");
    let tsv = dir.path().join("t.tsv");
    std::fs::write(&csv, "a,b\n1,x\n2,\n")?;
    std::fs::write(&tsv, "a\tb\n1\tx\n2\ty\n")?;

    let from_csv = load_dataset(&csv, &ProfilerConfig::default())?;
    assert_eq!(Shape::of(&from_csv), Shape::new(2, 2));
    assert_eq!(from_csv.column("b")?.null_count(), 1);
    assert!(from_csv.column("a")?.dtype().is_primitive_numeric());

    let from_tsv = load_dataset(&tsv, &ProfilerConfig::default())?;
    assert_eq!(Shape::of(&from_tsv), Shape::new(2, 2));
    Ok(())
}
