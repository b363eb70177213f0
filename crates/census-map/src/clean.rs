use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t]+").expect("valid regex"));
static PAREN_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid regex"));
static BRACKET_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));
static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));
static TRAILING_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*$").expect("valid regex"));

/// Clean a raw header so aliases match despite line breaks, `(...)` or
/// `[...]` hints, trailing colons and odd spacing.
///
/// `"Gender\n(M or F)"` becomes `"gender"`.
pub fn clean_header_label(raw: &str) -> String {
    let value: String = raw.trim().nfkc().collect();
    let value = LINE_BREAKS.replace_all(&value, " ");
    let value = PAREN_HINT.replace_all(&value, "");
    let value = BRACKET_HINT.replace_all(&value, "");
    let value = MULTI_SPACE.replace_all(&value, " ");
    let value = TRAILING_COLON.replace(&value, "");
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_breaks_and_hints() {
        assert_eq!(clean_header_label("Gender\n(M or F)"), "gender");
        assert_eq!(clean_header_label("DOB [MM/DD/YYYY]"), "dob");
        assert_eq!(clean_header_label("Home\r\nZip Code"), "home zip code");
    }

    #[test]
    fn strips_trailing_colon_and_spacing() {
        assert_eq!(clean_header_label("  First   Name :  "), "first name");
        assert_eq!(clean_header_label("Coverage Tier:"), "coverage tier");
    }

    #[test]
    fn applies_compatibility_normalization() {
        // Full-width letters and a non-breaking space.
        assert_eq!(clean_header_label("ＤＯＢ"), "dob");
        assert_eq!(clean_header_label("Zip\u{a0}Code"), "zip code");
    }

    #[test]
    fn hint_removal_is_non_greedy() {
        assert_eq!(
            clean_header_label("Member (EE) Type (SP/CH)"),
            "member type"
        );
    }
}
