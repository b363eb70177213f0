//! Loader tests against files on disk.

use std::io::Write;

use census_ingest::{CensusSource, IngestError, IngestOptions, load_source};
use census_model::RawCell;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Sheet with a company block above the roster, the way vendor exports look.
const VENDOR_SHEET: &str = "\
Benefits Census,,,,
,,,,
,,,,
,,,,
Company:,,Acme  Widgets,,
Address:,,\"12 Main St\nSpringfield\",,
Instructions,,,SIC:,7372
FEIN:,,12-3456789,,
,,,,
First Name,Last Name,Zip,DOB,Relationship
John,Smith,02134,1/2/1980,EE
,,,,
Jane,Smith,02134,3/4/1982,Spouse
";

#[test]
fn loads_table_below_company_block() {
    let file = write_csv(VENDOR_SHEET);
    let options = IngestOptions::new().with_header_row(10);
    let loaded = load_source(CensusSource::path(file.path()), &options).unwrap();

    assert_eq!(
        loaded.table.headers,
        vec!["First Name", "Last Name", "Zip", "DOB", "Relationship"]
    );
    assert_eq!(loaded.table.height(), 2);
    assert_eq!(loaded.table.cell(0, 2), &RawCell::Text("02134".to_string()));
    assert_eq!(loaded.table.cell(1, 0), &RawCell::Text("Jane".to_string()));

    let metadata = loaded.metadata();
    assert_eq!(metadata.company, "Acme Widgets");
    assert_eq!(metadata.address, "12 Main St Springfield");
    assert_eq!(metadata.fein, "12-3456789");
    assert_eq!(metadata.sic, "7372");
    assert_eq!(loaded.fingerprint.as_deref().map(str::len), Some(64));
}

#[test]
fn bytes_and_path_sources_agree() {
    let content = "First Name,Last Name\nJohn,Smith\n";
    let file = write_csv(content);
    let from_path = load_source(CensusSource::path(file.path()), &IngestOptions::default()).unwrap();
    let from_bytes = load_source(
        CensusSource::bytes("upload.csv", content.as_bytes()),
        &IngestOptions::default(),
    )
    .unwrap();
    assert_eq!(from_path.table, from_bytes.table);
    assert_eq!(from_path.fingerprint, from_bytes.fingerprint);
    assert_eq!(from_bytes.origin, "upload.csv");
}

#[test]
fn missing_file_is_fatal() {
    let err = load_source(
        CensusSource::path("/nonexistent/census.csv"),
        &IngestOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_only_file_loads_empty_table() {
    let file = write_csv("First Name,Last Name\n");
    let loaded = load_source(CensusSource::path(file.path()), &IngestOptions::default()).unwrap();
    assert_eq!(loaded.table.width(), 2);
    assert_eq!(loaded.table.height(), 0);
}

#[test]
fn empty_file_is_fatal() {
    let file = write_csv("");
    let err = load_source(CensusSource::path(file.path()), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyInput { .. }));
}

#[test]
fn invalid_row_selection_is_fatal() {
    let options = IngestOptions::new().with_header_row(3).with_first_data_row(2);
    let err = load_source(CensusSource::bytes("x.csv", "a\nb\nc\n"), &options).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidRowSelection {
            header_row: 3,
            first_data_row: 2
        }
    ));
}
