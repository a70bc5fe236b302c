//! First-sheet reader for Excel and OpenDocument workbooks.
//!
//! The first row holds the column names. Each column is typed from its
//! non-missing cells: all numbers become `Int64` (when every value is whole)
//! or `Float64`, all booleans become `Boolean`, all dates become `Datetime`,
//! and anything mixed is kept as text.

use super::io::NA_VALUES;
use calamine::{Data, Range, Reader as _, open_workbook_auto};
use polars::prelude::*;
use std::path::Path;

/// Largest magnitude stored as `Int64` without losing precision through `f64`.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// # Errors
///
/// Fails if the file is not a readable workbook or has no sheets.
pub fn read_first_sheet(path: &Path) -> PolarsResult<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_err(&e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PolarsError::ComputeError("workbook has no sheets".into()))?
        .map_err(|e| workbook_err(&e))?;
    sheet_frame(&range)
}

fn workbook_err(err: &calamine::Error) -> PolarsError {
    PolarsError::ComputeError(format!("cannot read workbook: {err}").into())
}

/// # Errors
///
/// Fails if the columns cannot form a frame.
pub fn sheet_frame(range: &Range<Data>) -> PolarsResult<DataFrame> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let body: Vec<&[Data]> = rows.collect();

    let columns = header_names(header)
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let cells: Vec<Option<&Data>> = body
                .iter()
                .map(|row| row.get(i).filter(|cell| !is_missing(cell)))
                .collect();
            typed_column(&name, &cells)
        })
        .collect();
    DataFrame::new(columns)
}

/// Header text per column. Blank headers become `Unnamed: <index>` and
/// repeated names get a `.1`, `.2`, ... suffix.
fn header_names(header: &[Data]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header.len());
    for (i, cell) in header.iter().enumerate() {
        let text = cell.to_string();
        let base = if text.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            text.trim().to_owned()
        };
        let mut name = base.clone();
        let mut n = 1;
        while names.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        names.push(name);
    }
    names
}

fn is_missing(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => {
            let s = s.trim();
            s.is_empty() || NA_VALUES.contains(&s)
        }
        _ => false,
    }
}

fn as_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(v) => Some(*v as f64),
        Data::Float(v) => Some(*v),
        _ => None,
    }
}

fn typed_column(name: &str, cells: &[Option<&Data>]) -> Column {
    let present: Vec<&Data> = cells.iter().flatten().copied().collect();
    let name = PlSmallStr::from(name);

    if present.is_empty() {
        let empty: Vec<Option<&str>> = vec![None; cells.len()];
        return Column::new(name, empty);
    }

    if present.iter().all(|c| as_number(c).is_some()) {
        let values: Vec<Option<f64>> = cells.iter().map(|c| c.and_then(as_number)).collect();
        let whole = values
            .iter()
            .flatten()
            .all(|v| v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT);
        if whole {
            let ints: Vec<Option<i64>> = values.iter().map(|v| v.map(|x| x as i64)).collect();
            return Column::new(name, ints);
        }
        return Column::new(name, values);
    }

    if present.iter().all(|c| matches!(c, Data::Bool(_))) {
        let flags: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                Some(Data::Bool(b)) => Some(*b),
                _ => None,
            })
            .collect();
        return Column::new(name, flags);
    }

    if present.iter().all(|c| matches!(c, Data::DateTime(_))) {
        let millis: Int64Chunked = cells
            .iter()
            .map(|c| match c {
                Some(Data::DateTime(dt)) => dt
                    .as_datetime()
                    .map(|d| d.and_utc().timestamp_millis()),
                _ => None,
            })
            .collect();
        return millis
            .with_name(name)
            .into_datetime(TimeUnit::Milliseconds, None)
            .into_column();
    }

    let text: Vec<Option<String>> = cells
        .iter()
        .map(|c| c.map(ToString::to_string))
        .collect();
    Column::new(name, text)
}
