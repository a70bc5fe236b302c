use crate::error::Result;
use polars::prelude::*;

/// True when some value in the column occurs more than once. Nulls compare
/// equal to each other, so two missing cells count as a repeat.
pub fn has_repeated_values(col: &Column) -> Result<bool> {
    let distinct = col.as_materialized_series().n_unique()?;
    Ok(distinct < col.len())
}

/// Names of the columns holding at least one repeated value, in column order.
///
/// This looks inside each column on its own; it does not compare columns
/// against each other.
///
/// # Errors
///
/// Propagates Polars failures while counting unique values.
pub fn duplicated_columns(df: &DataFrame) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for col in df.get_columns() {
        if has_repeated_values(col)? {
            names.push(col.name().to_string());
        }
    }
    Ok(names)
}

/// New dataframe without exact duplicate rows. The first occurrence of each
/// row is kept and row order is preserved; all columns stay.
///
/// # Errors
///
/// Propagates Polars failures from the unique query.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.height() < 2 {
        return Ok(df.clone());
    }
    let deduplicated = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    Ok(deduplicated)
}
