use super::classify::column_kind;
use super::constant::distinct_non_null;
use super::duplicates::has_repeated_values;
use super::types::ColumnProfile;
use crate::error::{Result, ResultExt as _};
use polars::prelude::*;

pub fn column_profile(col: &Column) -> Result<ColumnProfile> {
    let kind = column_kind(col.dtype());
    let distinct = distinct_non_null(col)
        .with_context(|| format!("Failed to count values in column '{}'", col.name()))?;
    Ok(ColumnProfile {
        name: col.name().to_string(),
        kind,
        class: kind.class(),
        count: col.len(),
        nulls: col.null_count(),
        distinct,
        has_duplicates: has_repeated_values(col)?,
        is_constant: distinct == 1,
    })
}

/// One profile per column, in dataframe order.
///
/// # Errors
///
/// Propagates Polars failures while counting unique values.
pub fn column_profiles(df: &DataFrame) -> Result<Vec<ColumnProfile>> {
    df.get_columns().iter().map(column_profile).collect()
}
