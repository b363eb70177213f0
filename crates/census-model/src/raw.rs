//! Source tables as loaded, before any header resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single source cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawCell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl RawCell {
    /// Build a cell from text, mapping blank input to [`RawCell::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(value)
        }
    }

    /// Returns true for empty cells and whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(value) => value.trim().is_empty(),
            RawCell::Number(value) => value.is_nan(),
            RawCell::Date(_) => false,
        }
    }

    /// Text form of the cell, as a spreadsheet would display it.
    ///
    /// Integral numbers render without a decimal part (`7.0` -> `"7"`),
    /// dates render as `YYYY-MM-DD`.
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(value) => value.clone(),
            RawCell::Number(value) if value.is_nan() => String::new(),
            RawCell::Number(value) => format_numeric(*value),
            RawCell::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::text(value)
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::text(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

impl From<NaiveDate> for RawCell {
    fn from(value: NaiveDate) -> Self {
        RawCell::Date(value)
    }
}

/// Formats a floating-point number without trailing zeros after the decimal point.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// A loaded source sheet: one header row plus data rows.
///
/// Headers are kept exactly as found, including duplicates and labels that
/// will never resolve. Rows may be shorter than the header; missing trailing
/// cells read as [`RawCell::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

static EMPTY_CELL: RawCell = RawCell::Empty;

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<RawCell>) {
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Cell at (row, column), or an empty cell when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &RawCell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constructor_maps_blank_to_empty() {
        assert_eq!(RawCell::text("   "), RawCell::Empty);
        assert_eq!(RawCell::text("EE"), RawCell::Text("EE".to_string()));
    }

    #[test]
    fn numbers_render_like_a_spreadsheet() {
        assert_eq!(RawCell::Number(7.0).to_text(), "7");
        assert_eq!(RawCell::Number(2345.5).to_text(), "2345.5");
        assert_eq!(RawCell::Number(0.0).to_text(), "0");
        assert_eq!(RawCell::Number(f64::NAN).to_text(), "");
        assert!(RawCell::Number(f64::NAN).is_empty());
    }

    #[test]
    fn out_of_range_cells_are_empty() {
        let mut table = RawTable::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(vec![RawCell::from("x")]);
        assert_eq!(table.cell(0, 0), &RawCell::Text("x".to_string()));
        assert_eq!(table.cell(0, 1), &RawCell::Empty);
        assert_eq!(table.cell(5, 0), &RawCell::Empty);
        assert_eq!(table.height(), 1);
        assert_eq!(table.width(), 2);
    }
}
