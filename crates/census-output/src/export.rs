//! CSV exports of the canonical and issues tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use census_model::{CensusTable, ISSUE_HEADERS, IssueTable};
use csv::Writer;
use tracing::info;

use crate::error::{OutputError, Result};

pub const ISSUES_FILE_NAME: &str = "census_issues.csv";
pub const NORMALIZED_FILE_NAME: &str = "normalized.csv";

/// Write issues with the four issue headers. An empty table still gets its header.
pub fn write_issues_csv<W: Write>(issues: &IssueTable, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(ISSUE_HEADERS)?;
    for issue in issues {
        let row = issue.row.to_string();
        writer.write_record([
            row.as_str(),
            issue.first_name.as_str(),
            issue.last_name.as_str(),
            issue.message.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write canonical records with the ten canonical headers.
pub fn write_census_csv<W: Write>(table: &CensusTable, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(CensusTable::headers())?;
    for record in table {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_issues_file(issues: &IssueTable, path: &Path) -> Result<()> {
    write_issues_csv(issues, create(path)?)?;
    info!(path = %path.display(), issues = issues.len(), "issues written");
    Ok(())
}

pub fn write_census_file(table: &CensusTable, path: &Path) -> Result<()> {
    write_census_csv(table, create(path)?)?;
    info!(path = %path.display(), rows = table.len(), "normalized census written");
    Ok(())
}
