//! Birth date parsing.
//!
//! Accepts native date cells, spreadsheet serial numbers and the text
//! layouts census exports actually use; always emits `MM/DD/YYYY`.

use census_model::RawCell;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Largest serial a 1900-system workbook can hold (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Serial 60 is 1900-02-29, a day that never existed.
const PHANTOM_LEAP_DAY: u64 = 60;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Time parts spreadsheets append to US dates (`1/15/1980 0:00`).
const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%I:%M %p",
    "%I:%M:%S %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-1980
    "%b %d, %Y", // Jan 15, 1980
    "%B %d, %Y", // January 15, 1980
    "%Y%m%d",    // 19800115
];

/// Normalize a birth date cell to `MM/DD/YYYY`, or `""` when unparseable.
pub fn normalize_dob(cell: &RawCell) -> String {
    let date = match cell {
        RawCell::Empty => None,
        RawCell::Date(date) => Some(*date),
        RawCell::Number(serial) => excel_serial_to_date(*serial).or_else(|| compact_number(*serial)),
        RawCell::Text(text) => parse_date_text(text),
    };
    date.map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Convert a 1900-system spreadsheet serial to a date.
///
/// Any time-of-day fraction is dropped.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_EXCEL_SERIAL {
        return None;
    }
    let days = serial.floor() as u64;
    if days == PHANTOM_LEAP_DAY {
        return None;
    }
    // Serials after the phantom leap day are one ahead of the real calendar.
    let (base, offset) = if days < PHANTOM_LEAP_DAY {
        (NaiveDate::from_ymd_opt(1899, 12, 31)?, days)
    } else {
        (NaiveDate::from_ymd_opt(1899, 12, 30)?, days)
    };
    base.checked_add_days(Days::new(offset))
}

/// Large integral numbers that read as `YYYYMMDD`.
fn compact_number(value: f64) -> Option<NaiveDate> {
    if value.fract() != 0.0 || !(10_000_101.0..=99_991_231.0).contains(&value) {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{}", value as u64), "%Y%m%d").ok()
}

/// Parse a text date in any supported layout.
pub fn parse_date_text(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(date) = parse_us_date(trimmed) {
        return Some(date);
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn is_time_of_day(value: &str) -> bool {
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
}

/// `MM/DD/YYYY` or `M/D/YY`, chosen by the width of the year part.
///
/// A trailing time of day is accepted and dropped.
fn parse_us_date(value: &str) -> Option<NaiveDate> {
    let (date, time) = match value.split_once(char::is_whitespace) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (value, None),
    };
    if time.is_some_and(|time| !is_time_of_day(time)) {
        return None;
    }
    let parts: Vec<&str> = date.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    if month.len() > 2 || day.len() > 2 {
        return None;
    }
    let fmt = match year.len() {
        2 => "%m/%d/%y",
        4 => "%m/%d/%Y",
        _ => return None,
    };
    NaiveDate::parse_from_str(date, fmt).ok()
}
