//! Issue records surfaced to the census consumer.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};
use serde::{Deserialize, Serialize};

/// Issues table columns.
pub const ISSUE_HEADERS: [&str; 4] = ["Row", "First Name", "Last Name", "Issues"];

/// A problem (or warning) tied to one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusIssue {
    /// Spreadsheet row number: zero-based table position + 2.
    pub row: usize,
    pub first_name: String,
    pub last_name: String,
    /// One message, or several joined with `"; "`.
    pub message: String,
}

impl CensusIssue {
    /// Header row of the source sheet counts as row 1.
    pub const ROW_OFFSET: usize = 2;

    /// Spreadsheet row number for a zero-based table position.
    pub fn row_number(index: usize) -> usize {
        index + Self::ROW_OFFSET
    }
}

/// Ordered issue records. Empty when nothing was flagged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTable {
    pub issues: Vec<CensusIssue>,
}

impl IssueTable {
    pub fn new(issues: Vec<CensusIssue>) -> Self {
        Self { issues }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CensusIssue> {
        self.issues.iter()
    }

    /// Issues reported for a spreadsheet row number.
    pub fn for_row(&self, row: usize) -> impl Iterator<Item = &CensusIssue> {
        self.issues.iter().filter(move |issue| issue.row == row)
    }

    /// Build a DataFrame with the four issue columns.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let rows: Vec<u64> = self.issues.iter().map(|i| i.row as u64).collect();
        let first: Vec<&str> = self.issues.iter().map(|i| i.first_name.as_str()).collect();
        let last: Vec<&str> = self.issues.iter().map(|i| i.last_name.as_str()).collect();
        let messages: Vec<&str> = self.issues.iter().map(|i| i.message.as_str()).collect();
        DataFrame::new(vec![
            Series::new(ISSUE_HEADERS[0].into(), rows).into_column(),
            Series::new(ISSUE_HEADERS[1].into(), first).into_column(),
            Series::new(ISSUE_HEADERS[2].into(), last).into_column(),
            Series::new(ISSUE_HEADERS[3].into(), messages).into_column(),
        ])
    }
}

impl<'a> IntoIterator for &'a IssueTable {
    type Item = &'a CensusIssue;
    type IntoIter = std::slice::Iter<'a, CensusIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
