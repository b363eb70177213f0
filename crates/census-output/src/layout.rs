//! The fixed carrier sheet layout.
//!
//! ```text
//! row 1   Company Name:  .  .  <company>
//! row 2   Address:       .  .  <address>
//! row 3   FEIN:          .  .  <fein>
//! row 4   SIC Code:      .  .  <sic>
//! row 5   Total Employees: N | Total Enrolled: M
//! row 6   (blank)
//! row 7   carrier headers
//! row 8+  carrier rows
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use census_model::{CARRIER_HEADERS, CARRIER_SHEET_NAME, SheetMetadata};
use csv::WriterBuilder;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::projector::CarrierProjection;

/// Columns A through J.
pub const LAYOUT_WIDTH: usize = CARRIER_HEADERS.len();

/// Spreadsheet row holding the carrier headers.
pub const HEADER_ROW: usize = 7;

/// Column D, where metadata values go.
const METADATA_VALUE_COLUMN: usize = 3;

/// The carrier sheet as a grid of strings, ten cells per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierLayout {
    rows: Vec<[String; LAYOUT_WIDTH]>,
}

fn blank_row() -> [String; LAYOUT_WIDTH] {
    std::array::from_fn(|_| String::new())
}

impl CarrierLayout {
    pub fn build(metadata: &SheetMetadata, projection: &CarrierProjection) -> Self {
        let mut rows = Vec::with_capacity(HEADER_ROW + projection.table.len());
        for (label, value) in metadata.entries() {
            let mut row = blank_row();
            row[0] = label.to_string();
            row[METADATA_VALUE_COLUMN] = value.to_string();
            rows.push(row);
        }
        let mut totals = blank_row();
        totals[0] = projection.totals.summary_line();
        rows.push(totals);
        rows.push(blank_row());
        rows.push(CARRIER_HEADERS.map(str::to_string));
        for record in projection.table.iter() {
            rows.push(record.values().map(str::to_string));
        }
        Self { rows }
    }

    pub fn sheet_name(&self) -> &'static str {
        CARRIER_SHEET_NAME
    }

    pub fn rows(&self) -> &[[String; LAYOUT_WIDTH]] {
        &self.rows
    }

    /// Cell by 1-based spreadsheet row and 0-based column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row.checked_sub(1)?)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    pub fn data_rows(&self) -> &[[String; LAYOUT_WIDTH]] {
        &self.rows[HEADER_ROW..]
    }
}

/// Renders a [`CarrierLayout`] to bytes.
///
/// Workbook output lives outside this crate and consumes the same grid.
pub trait LayoutWriter {
    /// File extension of the rendered output, without the dot.
    fn extension(&self) -> &'static str;

    fn write_layout(&self, layout: &CarrierLayout, out: &mut dyn Write) -> Result<()>;
}

/// Writes the layout grid as CSV, blank cells as empty fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLayoutWriter;

impl LayoutWriter for CsvLayoutWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_layout(&self, layout: &CarrierLayout, out: &mut dyn Write) -> Result<()> {
        let mut writer = WriterBuilder::new().flexible(false).from_writer(out);
        for row in layout.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Render a layout to a file.
pub fn write_layout_file(
    writer: &dyn LayoutWriter,
    layout: &CarrierLayout,
    path: &Path,
) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    writer.write_layout(layout, &mut out)?;
    out.flush().map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = layout.data_rows().len(),
        sheet = layout.sheet_name(),
        "carrier layout written"
    );
    Ok(())
}
