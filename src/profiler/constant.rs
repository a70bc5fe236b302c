use crate::error::Result;
use polars::prelude::*;

/// Distinct values in the column, ignoring nulls.
pub fn distinct_non_null(col: &Column) -> Result<usize> {
    Ok(col.as_materialized_series().drop_nulls().n_unique()?)
}

/// A column is constant when it holds exactly one distinct non-null value.
/// A column with no values at all has zero distinct values and is not
/// constant.
pub fn is_constant(col: &Column) -> Result<bool> {
    Ok(distinct_non_null(col)? == 1)
}

/// # Errors
///
/// Propagates Polars failures while counting unique values.
pub fn constant_columns(df: &DataFrame) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for col in df.get_columns() {
        if is_constant(col)? {
            names.push(col.name().to_string());
        }
    }
    Ok(names)
}

/// New dataframe with the given columns removed and every other column kept
/// in its original order.
pub fn drop_constant_columns(df: &DataFrame, constant: &[String]) -> DataFrame {
    df.drop_many(constant.iter().map(String::as_str))
}
