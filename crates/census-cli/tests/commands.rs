//! Command-level tests against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use tempfile::{TempDir, tempdir};

use census_cli::cli::{Cli, Command};
use census_cli::commands::{ConvertOptions, convert, header_reports, ingest_options, normalize};
use census_cli::summary::issue_table;
use census_cli::types::HeaderStatus;
use census_core::IngestOptions;
use census_model::{CensusField, IssueTable, SheetMetadata};

const FAMILY: &str = "First Name,Last Name,Gender,DOB,Zip,Member Type,Coverage,Work Status\n\
                      John,Smith,M,1980-01-15,02134,EE,FAM,Active\n\
                      Amy,Smith,F,2010-05-01,02134,CH,,\n\
                      Ben,Smith,M,2012-07-04,02134,CH,,\n";

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("census.csv");
    fs::write(&path, content).unwrap();
    path
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

fn acme() -> SheetMetadata {
    SheetMetadata {
        company: "Acme Widgets".into(),
        ..SheetMetadata::default()
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn convert_writes_layout_and_issues() {
    let input_dir = tempdir().unwrap();
    let input = write_input(&input_dir, FAMILY);
    let out = tempdir().unwrap();
    let options = ConvertOptions::new(run_date())
        .with_output_dir(out.path())
        .with_overrides(acme());

    let report = convert(&input, &options).unwrap();

    assert_eq!(
        report.file_name,
        "Amplify AFA Census for Acme Widgets 2026-03-09.csv"
    );
    assert_eq!(report.carrier_rows, 3);
    assert_eq!(report.totals.total_employees, 1);
    assert_eq!(report.totals.total_enrolled, 1);
    assert!(report.issues.is_empty());
    assert_eq!(report.outputs.len(), 2);
    assert_eq!(
        file_names(out.path()),
        vec![
            "Amplify AFA Census for Acme Widgets 2026-03-09.csv".to_string(),
            "census_issues.csv".to_string(),
        ]
    );

    let layout = fs::read_to_string(out.path().join(&report.file_name)).unwrap();
    let lines: Vec<&str> = layout.lines().collect();
    assert_eq!(lines[0], "Company Name:,,,Acme Widgets,,,,,,");
    assert_eq!(lines[4], "Total Employees: 1 | Total Enrolled: 1,,,,,,,,,");
    assert_eq!(lines[7], "Smith,John,02134,01/15/1980,M,EEFamily,,EE,Active,");
    assert_eq!(lines[9], "Smith,Ben,02134,07/04/2012,M,EEFamily,,CH,,");

    let issues = fs::read_to_string(out.path().join("census_issues.csv")).unwrap();
    assert_eq!(issues, "Row,First Name,Last Name,Issues\n");
}

#[test]
fn convert_dry_run_writes_nothing() {
    let input_dir = tempdir().unwrap();
    let input = write_input(&input_dir, FAMILY);
    let out = tempdir().unwrap();
    let options = ConvertOptions::new(run_date())
        .with_output_dir(out.path())
        .with_dry_run(true);

    let report = convert(&input, &options).unwrap();

    assert!(report.outputs.is_empty());
    assert!(file_names(out.path()).is_empty());
    assert_eq!(
        report.file_name,
        "Amplify AFA Census for Unknown Company 2026-03-09.csv"
    );
}

#[test]
fn convert_reads_company_block_and_applies_overrides() {
    let input_dir = tempdir().unwrap();
    let input = write_input(
        &input_dir,
        ",,,,\n,,,,\n,,,,\n,,,,\n\
         ,Company:,Acme Widgets,,\n\
         ,Address:,12 Main St,,\n\
         ,,,SIC:,7372\n\
         ,FEIN:,12-3456789,,\n\
         First Name,Last Name,DOB,Zip,Member Type,Coverage\n\
         John,Smith,01/15/1980,02134,EE,EE\n",
    );
    let out = tempdir().unwrap();
    let options = ConvertOptions::new(run_date())
        .with_ingest(IngestOptions::default().with_header_row(9))
        .with_output_dir(out.path())
        .with_dry_run(true)
        .with_overrides(SheetMetadata {
            sic: "5411".into(),
            ..SheetMetadata::default()
        });

    let report = convert(&input, &options).unwrap();

    assert_eq!(report.metadata.company, "Acme Widgets");
    assert_eq!(report.metadata.address, "12 Main St");
    assert_eq!(report.metadata.fein, "12-3456789");
    assert_eq!(report.metadata.sic, "5411");
    assert_eq!(report.carrier_rows, 1);
}

#[test]
fn normalize_writes_canonical_and_issue_tables() {
    let input_dir = tempdir().unwrap();
    let input = write_input(
        &input_dir,
        "First Name,Last Name,DOB,Zip,Member Type,Coverage,Work Status\n\
         John,Smith,1980-01-15,2134,EE,EE,Retired\n",
    );
    let out = tempdir().unwrap();

    let report = normalize(&input, &IngestOptions::default(), Some(out.path())).unwrap();

    assert_eq!(report.summary.rows, 1);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(
        file_names(out.path()),
        vec!["census_issues.csv".to_string(), "normalized.csv".to_string()]
    );
    let normalized = fs::read_to_string(out.path().join("normalized.csv")).unwrap();
    let mut lines = normalized.lines();
    assert_eq!(
        lines.next(),
        Some(
            "First Name,Last Name,Gender,Date of Birth,Home Zip Code,Member Type,\
             Coverage Tier,Work Status,Work Zip,Current Medical Plan"
        )
    );
    assert_eq!(lines.next(), Some("John,Smith,,01/15/1980,02134,EE,EE,,,"));
    let issues = fs::read_to_string(out.path().join("census_issues.csv")).unwrap();
    assert!(issues.lines().nth(1).unwrap().starts_with("2,John,Smith,"));
    assert!(issues.contains("Retired"));
}

#[test]
fn normalize_creates_missing_output_dir() {
    let input_dir = tempdir().unwrap();
    let input = write_input(&input_dir, FAMILY);
    let out = tempdir().unwrap();
    let nested = out.path().join("runs").join("march");

    let report = normalize(&input, &IngestOptions::default(), Some(&nested)).unwrap();

    assert_eq!(report.outputs.len(), 2);
    assert!(nested.join("normalized.csv").exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let error = normalize(&missing, &IngestOptions::default(), Some(dir.path())).unwrap_err();

    let chain = format!("{error:#}");
    assert!(chain.contains("nope.csv"), "{chain}");
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn header_reports_mark_superseded_and_ignored_columns() {
    let headers: Vec<String> = ["First Name", "Gender\n(M or F)", "Notes", "Zip", "Home Zip"]
        .iter()
        .map(|label| (*label).to_string())
        .collect();

    let reports = header_reports(&headers);

    assert_eq!(reports[0].field, Some(CensusField::FirstName));
    assert_eq!(reports[1].cleaned, "gender");
    assert_eq!(reports[1].field, Some(CensusField::Gender));
    assert_eq!(reports[2].status, HeaderStatus::Ignored);
    assert_eq!(reports[2].field, None);
    assert_eq!(reports[3].status, HeaderStatus::Superseded);
    assert_eq!(reports[4].status, HeaderStatus::Mapped);
    assert_eq!(reports[4].field, Some(CensusField::HomeZipCode));
}

#[test]
fn clean_run_has_no_issue_table() {
    assert!(issue_table(&IssueTable::default()).is_none());
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn convert_arguments_parse() {
    let cli = Cli::try_parse_from([
        "census",
        "convert",
        "roster.csv",
        "--header-row",
        "9",
        "--company",
        "Acme Widgets",
        "--dry-run",
        "--log-data",
    ])
    .unwrap();

    assert!(cli.log_data);
    let Command::Convert(args) = cli.command else {
        panic!("expected convert");
    };
    assert_eq!(args.company.as_deref(), Some("Acme Widgets"));
    assert!(args.output.dry_run);
    let options = ingest_options(&args.source);
    assert_eq!(options.header_row, 9);
    assert_eq!(options.first_data_row, 10);
}

#[test]
fn explicit_first_data_row_wins() {
    let cli = Cli::try_parse_from([
        "census",
        "headers",
        "roster.csv",
        "--header-row",
        "3",
        "--first-data-row",
        "6",
    ])
    .unwrap();

    let Command::Headers(args) = cli.command else {
        panic!("expected headers");
    };
    let options = ingest_options(&args);
    assert_eq!(options.header_row, 3);
    assert_eq!(options.first_data_row, 6);
}

#[test]
fn header_reports_serialize_for_json_output() {
    let headers = vec!["First Name".to_string(), "Notes".to_string()];
    insta::assert_json_snapshot!(header_reports(&headers), @r#"
    [
      {
        "index": 0,
        "label": "First Name",
        "cleaned": "first name",
        "field": "FirstName",
        "method": "alias",
        "status": "mapped"
      },
      {
        "index": 1,
        "label": "Notes",
        "cleaned": "notes",
        "field": null,
        "method": null,
        "status": "ignored"
      }
    ]
    "#);
}
