//! Company block stored in fixed cells of the source sheet.

use census_model::SheetMetadata;

use crate::grid::CellGrid;

const COMPANY_CELL: &str = "C5";
const ADDRESS_CELL: &str = "C6";
const FEIN_CELL: &str = "C8";
const SIC_CELL: &str = "E7";

/// Read company, address, FEIN and SIC from their fixed cells.
///
/// Missing cells read as empty strings.
pub fn read_sheet_metadata(grid: &CellGrid) -> SheetMetadata {
    let read = |reference: &str| {
        grid.cell_ref(reference)
            .map(clean_metadata_value)
            .unwrap_or_default()
    };
    SheetMetadata {
        company: read(COMPANY_CELL),
        address: read(ADDRESS_CELL),
        fein: read(FEIN_CELL),
        sic: read(SIC_CELL),
    }
}

/// Trim and collapse internal whitespace (including line breaks) to single spaces.
pub fn clean_metadata_value(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
