use super::spreadsheet;
use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use polars::prelude::*;
use std::path::Path;

/// Cell text read as a missing value in delimited files and workbooks.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read the whole table at `path` into memory.
///
/// The reader is picked from the file extension. Workbooks (`xlsx`, `xlsm`,
/// `xls`, `ods`) are read from their first sheet. Every failure, including a
/// missing file, becomes [`ProfileError::Load`].
///
/// # Errors
///
/// Returns [`ProfileError::Load`] if the file is missing, has an unsupported
/// extension, or cannot be parsed.
pub fn load_dataset(path: &Path, config: &ProfilerConfig) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(ProfileError::Load(format!(
            "{} does not exist or is not a file",
            path.display()
        )));
    }

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let loaded = match ext.as_str() {
        "csv" | "txt" => read_delimited(path, b',', config),
        "tsv" => read_delimited(path, b'\t', config),
        "parquet" => std::fs::File::open(path)
            .map_err(PolarsError::from)
            .and_then(|file| ParquetReader::new(file).finish()),
        "json" => std::fs::File::open(path)
            .map_err(PolarsError::from)
            .and_then(|file| JsonReader::new(file).finish()),
        "jsonl" | "ndjson" => JsonLineReader::from_path(path).and_then(|r| r.finish()),
        "xlsx" | "xlsm" | "xls" | "ods" => spreadsheet::read_first_sheet(path),
        _ => {
            return Err(ProfileError::Load(format!(
                "unsupported file extension '{ext}' for {}",
                path.display()
            )));
        }
    };

    let df = loaded.map_err(|e| ProfileError::Load(format!("{}: {e}", path.display())))?;
    if df.width() == 0 {
        return Err(ProfileError::Load(format!(
            "{} contains no columns",
            path.display()
        )));
    }

    normalise_missing(df).map_err(|e| ProfileError::Load(format!("{}: {e}", path.display())))
}

fn read_delimited(path: &Path, separator: u8, config: &ProfilerConfig) -> PolarsResult<DataFrame> {
    let null_values = NullValues::AllColumns(NA_VALUES.iter().map(|s| (*s).into()).collect());
    LazyCsvReader::new(path)
        .with_separator(separator)
        .with_infer_schema_length(Some(config.infer_schema_length))
        .with_has_header(true)
        .with_null_values(Some(null_values))
        .with_try_parse_dates(config.try_parse_dates)
        .finish()?
        .collect()
}

/// Make every kind of missing cell a null: blank or whitespace-only text, the
/// way a spreadsheet treats an empty cell, and floating-point NaN.
///
/// # Errors
///
/// Fails if a column's data does not match its dtype.
pub fn normalise_missing(df: DataFrame) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        let series = col.as_materialized_series();
        let name = col.name().clone();
        let cleaned = match col.dtype() {
            DataType::String => series
                .str()?
                .into_iter()
                .map(|v| v.filter(|s| !s.trim().is_empty()))
                .collect::<StringChunked>()
                .with_name(name)
                .into_series(),
            DataType::Float64 => series
                .f64()?
                .into_iter()
                .map(|v| v.filter(|x| !x.is_nan()))
                .collect::<Float64Chunked>()
                .with_name(name)
                .into_series(),
            DataType::Float32 => series
                .f32()?
                .into_iter()
                .map(|v| v.filter(|x| !x.is_nan()))
                .collect::<Float32Chunked>()
                .with_name(name)
                .into_series(),
            _ => {
                columns.push(col.clone());
                continue;
            }
        };
        columns.push(Column::from(cleaned));
    }
    DataFrame::new(columns)
}
