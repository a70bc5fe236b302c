use super::types::{ColumnClass, ColumnKind};
use polars::prelude::*;

pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if dtype.is_primitive_numeric() {
        ColumnKind::Numeric
    } else if dtype.is_bool() {
        ColumnKind::Boolean
    } else if dtype.is_temporal() {
        ColumnKind::Temporal
    } else if matches!(dtype, DataType::Null) {
        ColumnKind::Empty
    } else {
        ColumnKind::Text
    }
}

/// Split column names into `(numeric, categorical)`, each in dataframe order.
/// Every column lands in exactly one of the two lists.
pub fn classify_columns(df: &DataFrame) -> (Vec<String>, Vec<String>) {
    let mut numeric = Vec::new();
    let mut categorical = Vec::new();
    for col in df.get_columns() {
        let name = col.name().to_string();
        match column_kind(col.dtype()).class() {
            ColumnClass::Numeric => numeric.push(name),
            ColumnClass::Categorical => categorical.push(name),
        }
    }
    (numeric, categorical)
}
