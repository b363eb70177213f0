//! ZIP code normalization.

use census_model::RawCell;

/// Normalize a ZIP code to five digits.
///
/// ZIP+4 keeps the part before the first `-`. Non-digits are removed, short
/// values are left-padded with zeros (spreadsheets drop them from numeric
/// cells) and long values are cut to five digits. Nothing left gives `""`.
pub fn normalize_zip(cell: &RawCell) -> String {
    let text = cell.to_text();
    let text = text.trim();
    let head = text.split('-').next().unwrap_or_default();
    let digits: String = head.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let mut padded = format!("{digits:0>5}");
    padded.truncate(5);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_zip5_of_zip_plus_four() {
        assert_eq!(normalize_zip(&"02134-1234".into()), "02134");
        assert_eq!(normalize_zip(&"90210".into()), "90210");
    }

    #[test]
    fn pads_numeric_cells() {
        assert_eq!(normalize_zip(&RawCell::Number(7.0)), "00007");
        assert_eq!(normalize_zip(&RawCell::Number(2134.0)), "02134");
        assert_eq!(normalize_zip(&"2134".into()), "02134");
    }

    #[test]
    fn strips_noise_and_truncates() {
        assert_eq!(normalize_zip(&" ZIP 021 34 ".into()), "02134");
        assert_eq!(normalize_zip(&"021345678".into()), "02134");
        assert_eq!(normalize_zip(&"N/A".into()), "");
        assert_eq!(normalize_zip(&RawCell::Empty), "");
        assert_eq!(normalize_zip(&"-1234".into()), "");
    }
}
