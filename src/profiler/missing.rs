use super::types::MissingValue;
use polars::prelude::DataFrame;

/// Null count per column, keeping only columns with at least one null.
/// Column order follows the dataframe.
pub fn missing_values(df: &DataFrame) -> Vec<MissingValue> {
    df.get_columns()
        .iter()
        .filter_map(|col| {
            let count = col.null_count();
            (count > 0).then(|| MissingValue {
                column: col.name().to_string(),
                count,
            })
        })
        .collect()
}

pub fn total_missing(missing: &[MissingValue]) -> usize {
    missing.iter().map(|m| m.count).sum()
}
