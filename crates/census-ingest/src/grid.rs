//! Unparsed sheet grid, addressed by spreadsheet row numbers.

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Every line of a sheet export as plain strings.
///
/// Row `i` of the grid is spreadsheet row `i + 1`. Blank lines are kept as
/// empty rows so fixed cell references (`C5`, `E7`) and the configured
/// header row keep pointing at the same cells the sheet shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    rows: Vec<Vec<String>>,
}

impl CellGrid {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Zero-based lookup; `None` when the cell lies outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// A1-style lookup (`"C5"`).
    pub fn cell_ref(&self, reference: &str) -> Option<&str> {
        let (row, column) = parse_cell_ref(reference)?;
        self.get(row, column)
    }

    pub fn is_blank_row(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_none_or(|cells| cells.iter().all(|cell| cell.trim().is_empty()))
    }
}

/// Parse an A1-style reference into zero-based `(row, column)`.
pub fn parse_cell_ref(reference: &str) -> Option<(usize, usize)> {
    let reference = reference.trim();
    let split = reference.find(|ch: char| ch.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || !letters.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    let column = letters
        .chars()
        .map(|ch| ch.to_ascii_uppercase() as usize - 'A' as usize + 1)
        .fold(0usize, |acc, value| acc * 26 + value);
    Some((row - 1, column - 1))
}

/// Read CSV bytes into a [`CellGrid`].
///
/// Fields are decoded lossily so a stray Windows-1252 byte does not abort
/// the load. A leading UTF-8 BOM is removed from the first cell.
pub fn read_csv_grid(bytes: &[u8], origin: &str) -> Result<CellGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows: Vec<Vec<String>> = Vec::new();
    // Line on which the next record would start if no blank lines were skipped.
    let mut expected_line: u64 = 1;
    for record in reader.byte_records() {
        let record = record.map_err(|err| IngestError::CsvParse {
            origin: origin.to_string(),
            message: err.to_string(),
        })?;
        // The reader drops empty lines; put them back as empty rows.
        if let Some(position) = record.position() {
            while expected_line < position.line() {
                rows.push(Vec::new());
                expected_line += 1;
            }
        }
        let embedded_newlines = record
            .iter()
            .map(|field| field.iter().filter(|byte| **byte == b'\n').count() as u64)
            .sum::<u64>();
        expected_line += 1 + embedded_newlines;
        let row: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        rows.push(row);
    }
    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }
    Ok(CellGrid::from_rows(rows))
}
