//! Raw tables from already-loaded DataFrames.

use census_model::{RawCell, RawTable};
use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame};

use crate::error::Result;

/// Days between 0001-01-01 (CE day 1) and the Unix epoch.
const UNIX_EPOCH_CE_DAYS: i32 = 719_163;

/// Convert one DataFrame value into a raw cell.
///
/// Numeric types become [`RawCell::Number`], date columns become
/// [`RawCell::Date`], strings go through [`RawCell::text`].
pub fn cell_from_any(value: AnyValue<'_>) -> RawCell {
    match value {
        AnyValue::Null => RawCell::Empty,
        AnyValue::Int8(v) => RawCell::Number(f64::from(v)),
        AnyValue::Int16(v) => RawCell::Number(f64::from(v)),
        AnyValue::Int32(v) => RawCell::Number(f64::from(v)),
        AnyValue::Int64(v) => RawCell::Number(v as f64),
        AnyValue::UInt8(v) => RawCell::Number(f64::from(v)),
        AnyValue::UInt16(v) => RawCell::Number(f64::from(v)),
        AnyValue::UInt32(v) => RawCell::Number(f64::from(v)),
        AnyValue::UInt64(v) => RawCell::Number(v as f64),
        AnyValue::Float32(v) => RawCell::Number(f64::from(v)),
        AnyValue::Float64(v) => RawCell::Number(v),
        AnyValue::String(s) => RawCell::text(s),
        AnyValue::StringOwned(s) => RawCell::text(s.as_str()),
        AnyValue::Date(days) => days
            .checked_add(UNIX_EPOCH_CE_DAYS)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map_or(RawCell::Empty, RawCell::Date),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                RawCell::text(&s[1..s.len() - 1])
            } else {
                RawCell::text(s)
            }
        }
    }
}

/// Build a raw table from a DataFrame, one header per column.
pub fn raw_table_from_frame(df: &DataFrame) -> Result<RawTable> {
    let columns = df.get_columns();
    let headers = columns
        .iter()
        .map(|column| column.name().to_string())
        .collect();
    let mut table = RawTable::new(headers);
    for row_idx in 0..df.height() {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            cells.push(cell_from_any(column.get(row_idx)?));
        }
        if cells.iter().all(RawCell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }
    Ok(table)
}
