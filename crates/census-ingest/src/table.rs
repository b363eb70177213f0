use census_model::{RawCell, RawTable};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::grid::CellGrid;
use crate::options::IngestOptions;

/// Select the header row and data rows of a grid.
///
/// Blank data lines are dropped. Cells beyond the header width have no
/// label to resolve against and are discarded.
pub fn table_from_grid(grid: &CellGrid, options: &IngestOptions, origin: &str) -> Result<RawTable> {
    options.validate()?;
    if grid.rows().iter().all(|row| row.iter().all(|cell| cell.trim().is_empty())) {
        return Err(IngestError::EmptyInput {
            origin: origin.to_string(),
        });
    }
    let header_index = options.header_index();
    if grid.is_blank_row(header_index) {
        return Err(IngestError::NoHeader {
            origin: origin.to_string(),
            header_row: options.header_row,
        });
    }
    let headers: Vec<String> = grid.rows()[header_index].clone();
    let width = headers.len();
    let mut table = RawTable::new(headers);
    let mut skipped = 0usize;
    for (index, row) in grid.rows().iter().enumerate().skip(options.data_index()) {
        if grid.is_blank_row(index) {
            skipped += 1;
            continue;
        }
        let cells: Vec<RawCell> = (0..width)
            .map(|column| row.get(column).map(String::as_str).map_or(RawCell::Empty, RawCell::text))
            .collect();
        table.push_row(cells);
    }
    debug!(
        origin,
        header_row = options.header_row,
        rows = table.height(),
        blank_rows_skipped = skipped,
        "selected data rows"
    );
    Ok(table)
}
