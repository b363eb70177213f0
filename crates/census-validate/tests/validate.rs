//! Issue table assembly across rule results and pipeline warnings.

use census_model::{CensusRecord, CensusTable, IssueTable};
use census_validate::{RowWarning, row_problems, validate_rows};

fn record(first: &str, last: &str, member: &str) -> CensusRecord {
    CensusRecord {
        first_name: first.into(),
        last_name: last.into(),
        member_type: member.into(),
        date_of_birth: "01/15/1980".into(),
        home_zip_code: "02134".into(),
        coverage_tier: "FAM".into(),
        ..CensusRecord::default()
    }
}

fn render(issues: &IssueTable) -> String {
    issues
        .iter()
        .map(|issue| {
            format!(
                "{} | {} | {} | {}",
                issue.row, issue.first_name, issue.last_name, issue.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn clean_roster_has_empty_issue_table() {
    let table = CensusTable::new(vec![record("John", "Smith", "EE"), record("Amy", "Smith", "CH")]);
    let issues = validate_rows(&table, &[], &[]);
    assert!(issues.is_empty());
}

#[test]
fn first_data_row_is_row_two() {
    let table = CensusTable::new(vec![record("", "Smith", "EE")]);
    let issues = validate_rows(&table, &[], &[]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.issues[0].row, 2);
    assert_eq!(issues.issues[0].message, "Missing First Name");
}

#[test]
fn multiple_problems_join_into_one_issue() {
    let mut bad = record("", "", "EE");
    bad.date_of_birth.clear();
    bad.home_zip_code.clear();
    assert_eq!(
        row_problems(&bad).join("; "),
        "Missing First Name; Missing Last Name; Subscriber missing DOB; Subscriber missing Home Zip"
    );
}

#[test]
fn warnings_bracket_row_problems() {
    let mut spouse = record("Jane", "Smith", "SP");
    spouse.work_status = "Active".into();
    let mut odd_tier = record("Kim", "Lee", "EE");
    odd_tier.coverage_tier = "GOLD".into();
    let table = CensusTable::new(vec![
        record("", "Madonna", "EE"),
        spouse,
        odd_tier,
        record("Bob", "Jones", "EE"),
    ]);
    let name_warnings = [RowWarning::new(
        0,
        "Full Name has single token; treated as last name",
    )];
    let status_warnings = [RowWarning::new(
        3,
        "Ignored non-supported Work Status 'Retired' (only Active/Cobra kept)",
    )];

    let issues = validate_rows(&table, &name_warnings, &status_warnings);
    insta::assert_snapshot!(render(&issues), @r"
    2 |  | Madonna | Full Name has single token; treated as last name
    2 |  | Madonna | Missing First Name
    3 | Jane | Smith | Work Status should be blank for non-EE
    4 | Kim | Lee | Coverage Tier invalid
    5 | Bob | Jones | Ignored non-supported Work Status 'Retired' (only Active/Cobra kept)
    ");
}
