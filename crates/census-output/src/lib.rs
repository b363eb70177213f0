#![deny(unsafe_code)]

//! Carrier output for normalized census data.
//!
//! - [`project_carrier`] turns canonical records into carrier rows and totals
//! - [`CarrierLayout`] places the company block, totals line, headers and
//!   rows on the fixed sheet grid
//! - [`LayoutWriter`] renders that grid ([`CsvLayoutWriter`] for CSV)
//! - [`write_issues_csv`] and [`write_census_csv`] export the other tables

mod error;
mod export;
mod filename;
mod layout;
mod projector;

pub use error::{OutputError, Result};
pub use export::{
    ISSUES_FILE_NAME, NORMALIZED_FILE_NAME, write_census_csv, write_census_file, write_issues_csv,
    write_issues_file,
};
pub use filename::{UNKNOWN_COMPANY, output_file_name, sanitize_company};
pub use layout::{
    CarrierLayout, CsvLayoutWriter, HEADER_ROW, LAYOUT_WIDTH, LayoutWriter, write_layout_file,
};
pub use projector::{CarrierProjection, project_carrier};
