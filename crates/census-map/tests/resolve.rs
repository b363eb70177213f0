//! Header resolution against realistic vendor header rows.

use census_map::{ColumnMapping, resolve_columns};
use census_model::CensusField;

fn render(mapping: &ColumnMapping) -> String {
    let mut lines: Vec<String> = mapping
        .assignments
        .iter()
        .map(|entry| format!("{} <- {:?} ({:?})", entry.field, entry.label, entry.method))
        .collect();
    for label in &mapping.ignored {
        lines.push(format!("ignored {label:?}"));
    }
    lines.join("\n")
}

fn headers(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

#[test]
fn payroll_export_headers() {
    let mapping = resolve_columns(&headers(&[
        "Employee ID",
        "Employee Name",
        "Sex",
        "Date of Birth (MM/DD/YYYY)",
        "Home Zip Code:",
        "Relationship",
        "Coverage\nElected",
        "Employment Status [Active/COBRA]",
        "Work Zip",
        "Medical Plan",
    ]));
    insta::assert_snapshot!(render(&mapping), @r#"
    Full Name <- "Employee Name" (Alias)
    Gender <- "Sex" (Alias)
    Date of Birth <- "Date of Birth (MM/DD/YYYY)" (Alias)
    Home Zip Code <- "Home Zip Code:" (Alias)
    Member Type <- "Relationship" (Alias)
    Coverage Tier <- "Coverage\nElected" (Heuristic)
    Work Status <- "Employment Status [Active/COBRA]" (Alias)
    Work Zip <- "Work Zip" (Alias)
    Current Medical Plan <- "Medical Plan" (Alias)
    ignored "Employee ID"
    "#);
    assert!(mapping.needs_name_split());
}

#[test]
fn split_name_headers_do_not_request_splitting() {
    let mapping = resolve_columns(&headers(&["FName", "LName", "Full Name"]));
    assert!(!mapping.needs_name_split());
    assert_eq!(mapping.column_for(CensusField::FullName), Some(2));
}

#[test]
fn mapping_serializes_for_reports() {
    let mapping = resolve_columns(&headers(&["Zip", "Salary"]));
    let json = serde_json::to_value(&mapping).unwrap();
    assert_eq!(json["assignments"][0]["field"], "HomeZipCode");
    assert_eq!(json["assignments"][0]["method"], "alias");
    assert_eq!(json["ignored"][0], "Salary");
}
