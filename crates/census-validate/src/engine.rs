use census_model::{CensusIssue, CensusRecord, CensusTable, IssueTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::ROW_RULES;

/// A warning raised for a row before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWarning {
    /// Zero-based position in the canonical table.
    pub index: usize,
    pub message: String,
}

impl RowWarning {
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }
}

/// Messages of every rule the record fails, in rule order.
pub fn row_problems(record: &CensusRecord) -> Vec<&'static str> {
    ROW_RULES
        .iter()
        .filter(|rule| (rule.fails)(record))
        .map(|rule| rule.message)
        .collect()
}

fn issue_for(table: &CensusTable, index: usize, message: String) -> CensusIssue {
    let (first_name, last_name) = table
        .records
        .get(index)
        .map(|record| (record.first_name.clone(), record.last_name.clone()))
        .unwrap_or_default();
    CensusIssue {
        row: CensusIssue::row_number(index),
        first_name,
        last_name,
        message,
    }
}

/// Validate every row and merge in earlier warnings.
///
/// Output order: name-split warnings, then row problems, then work status
/// warnings, each group in row order.
pub fn validate_rows(
    table: &CensusTable,
    name_warnings: &[RowWarning],
    status_warnings: &[RowWarning],
) -> IssueTable {
    let mut issues = Vec::with_capacity(name_warnings.len() + status_warnings.len());
    issues.extend(
        name_warnings
            .iter()
            .map(|warning| issue_for(table, warning.index, warning.message.clone())),
    );

    let mut flagged_rows = 0usize;
    for (index, record) in table.iter().enumerate() {
        let problems = row_problems(record);
        if problems.is_empty() {
            continue;
        }
        flagged_rows += 1;
        issues.push(issue_for(table, index, problems.join("; ")));
    }

    issues.extend(
        status_warnings
            .iter()
            .map(|warning| issue_for(table, warning.index, warning.message.clone())),
    );

    debug!(
        rows = table.len(),
        flagged_rows,
        name_warnings = name_warnings.len(),
        status_warnings = status_warnings.len(),
        "validated census rows"
    );
    IssueTable::new(issues)
}
