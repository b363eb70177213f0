use census_model::RawCell;

/// Trimmed text of a cell; empty cells give `""`.
pub fn normalize_text(cell: &RawCell) -> String {
    cell.to_text().trim().to_string()
}
