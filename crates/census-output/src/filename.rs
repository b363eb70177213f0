use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";

static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]+"#).expect("valid regex"));

/// Company name safe to use in a file name.
pub fn sanitize_company(company: &str) -> String {
    let stripped = FORBIDDEN.replace_all(company, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        collapsed
    }
}

/// `Amplify AFA Census for <company> <YYYY-MM-DD>.<ext>`
pub fn output_file_name(company: &str, date: NaiveDate, extension: &str) -> String {
    format!(
        "Amplify AFA Census for {} {}.{}",
        sanitize_company(company),
        date.format("%Y-%m-%d"),
        extension.trim_start_matches('.')
    )
}
