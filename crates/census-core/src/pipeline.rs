//! The normalization pipeline.

use std::time::Instant;

use anyhow::{Context, Result};
use census_ingest::{CensusSource, IngestOptions, load_source};
use census_map::{ColumnMapping, resolve_columns};
use census_model::{
    CensusField, CensusRecord, CensusTable, IssueTable, RawCell, RawTable, SheetMetadata,
};
use census_normalization::{NameSplit, normalize_field, normalize_work_status, split_full_name};
use census_validate::{RowWarning, validate_rows};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, trace};

use crate::privacy::redact_value;

/// Everything the pipeline produces for one source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub table: CensusTable,
    /// Empty, never absent, when nothing was flagged.
    pub issues: IssueTable,
    pub mapping: ColumnMapping,
    /// Company block from the source sheet's fixed cells.
    pub metadata: SheetMetadata,
    /// SHA-256 of the input bytes when the source was CSV.
    pub fingerprint: Option<String>,
}

/// Counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows: usize,
    pub issues: usize,
    pub mapped_columns: usize,
    pub ignored_columns: usize,
    pub missing_fields: Vec<String>,
    pub fingerprint: Option<String>,
}

impl NormalizationResult {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            rows: self.table.len(),
            issues: self.issues.len(),
            mapped_columns: self.mapping.assignments.len(),
            ignored_columns: self.mapping.ignored.len(),
            missing_fields: self
                .mapping
                .missing_fields()
                .into_iter()
                .map(|field| field.label().to_string())
                .collect(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}

/// Load and normalize a source with default row selection.
pub fn normalize_and_validate(source: CensusSource) -> Result<NormalizationResult> {
    normalize_and_validate_with(source, &IngestOptions::default())
}

/// Load and normalize a source.
///
/// Only loading can fail. Every later problem is reported in the issues
/// table or leaves a field empty.
pub fn normalize_and_validate_with(
    source: CensusSource,
    options: &IngestOptions,
) -> Result<NormalizationResult> {
    let origin = source.origin();
    let span = info_span!("normalize", source = %origin);
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = info_span!("load")
        .in_scope(|| load_source(source, options))
        .with_context(|| format!("load census source {origin}"))?;
    let metadata = loaded.metadata();

    let mut result = normalize_raw_table(&loaded.table);
    result.metadata = metadata;
    result.fingerprint = loaded.fingerprint;

    info!(
        rows = result.table.len(),
        issues = result.issues.len(),
        fingerprint = result.fingerprint.as_deref().unwrap_or(""),
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(result)
}

/// Run every stage after loading. Never fails.
pub fn normalize_raw_table(raw: &RawTable) -> NormalizationResult {
    let mapping = info_span!("resolve").in_scope(|| {
        let start = Instant::now();
        let mapping = resolve_columns(&raw.headers);
        info!(
            mapped = mapping.assignments.len(),
            ignored = mapping.ignored.len(),
            duration_ms = start.elapsed().as_millis(),
            "headers resolved"
        );
        mapping
    });

    let splits = info_span!("split_names").in_scope(|| split_names(raw, &mapping));

    let (table, name_warnings, status_warnings) = info_span!("normalize_fields").in_scope(|| {
        let start = Instant::now();
        let normalized = normalize_rows(raw, &mapping, splits.as_deref());
        info!(
            rows = normalized.0.len(),
            status_warnings = normalized.2.len(),
            duration_ms = start.elapsed().as_millis(),
            "fields normalized"
        );
        normalized
    });

    let issues = info_span!("validate").in_scope(|| {
        let start = Instant::now();
        let issues = validate_rows(&table, &name_warnings, &status_warnings);
        info!(
            issues = issues.len(),
            duration_ms = start.elapsed().as_millis(),
            "validation complete"
        );
        issues
    });

    NormalizationResult {
        table,
        issues,
        mapping,
        metadata: SheetMetadata::default(),
        fingerprint: None,
    }
}

static EMPTY_CELL: RawCell = RawCell::Empty;

fn source_cell<'a>(
    raw: &'a RawTable,
    mapping: &ColumnMapping,
    row: usize,
    field: CensusField,
) -> &'a RawCell {
    match mapping.column_for(field) {
        Some(column) => raw.cell(row, column),
        None => &EMPTY_CELL,
    }
}

/// Split the Full Name column when the source has no name parts.
fn split_names(raw: &RawTable, mapping: &ColumnMapping) -> Option<Vec<NameSplit>> {
    if !mapping.needs_name_split() {
        return None;
    }
    let splits: Vec<NameSplit> = (0..raw.height())
        .map(|row| {
            let full = source_cell(raw, mapping, row, CensusField::FullName).to_text();
            split_full_name(&full)
        })
        .collect();
    debug!(
        rows = splits.len(),
        warnings = splits.iter().map(|split| split.warnings.len()).sum::<usize>(),
        "full names split"
    );
    Some(splits)
}

fn normalize_rows(
    raw: &RawTable,
    mapping: &ColumnMapping,
    splits: Option<&[NameSplit]>,
) -> (CensusTable, Vec<RowWarning>, Vec<RowWarning>) {
    let mut records = Vec::with_capacity(raw.height());
    let mut name_warnings = Vec::new();
    let mut status_warnings = Vec::new();

    for row in 0..raw.height() {
        let cell = |field: CensusField| source_cell(raw, mapping, row, field);
        let value = |field: CensusField| normalize_field(field, cell(field));

        let (first_name, last_name) = match splits.and_then(|splits| splits.get(row)) {
            Some(split) => {
                name_warnings.extend(
                    split
                        .warnings
                        .iter()
                        .map(|warning| RowWarning::new(row, warning.clone())),
                );
                (split.first.trim().to_string(), split.last.trim().to_string())
            }
            None => (value(CensusField::FirstName), value(CensusField::LastName)),
        };

        let status = normalize_work_status(&cell(CensusField::WorkStatus).to_text());
        if let Some(warning) = status.warning {
            status_warnings.push(RowWarning::new(row, warning));
        }

        let record = CensusRecord {
            first_name,
            last_name,
            gender: value(CensusField::Gender),
            date_of_birth: value(CensusField::DateOfBirth),
            home_zip_code: value(CensusField::HomeZipCode),
            member_type: value(CensusField::MemberType),
            coverage_tier: value(CensusField::CoverageTier),
            // Warning already taken from the same outcome.
            work_status: status.value,
            work_zip: value(CensusField::WorkZip),
            current_medical_plan: value(CensusField::CurrentMedicalPlan),
        };
        trace!(
            row,
            first_name = redact_value(&record.first_name),
            last_name = redact_value(&record.last_name),
            date_of_birth = redact_value(&record.date_of_birth),
            member_type = %record.member_type,
            coverage_tier = %record.coverage_tier,
            "row normalized"
        );
        records.push(record);
    }

    (CensusTable::new(records), name_warnings, status_warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        let mut table = RawTable::new(headers.iter().map(|h| (*h).to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|cell| RawCell::text(*cell)).collect());
        }
        table
    }

    #[test]
    fn missing_columns_yield_empty_fields() {
        let result = normalize_raw_table(&raw(&["First Name", "Shoe Size"], &[&["John", "11"]]));
        let record = &result.table.records[0];
        assert_eq!(record.first_name, "John");
        assert_eq!(record.gender, "");
        assert_eq!(record.work_zip, "");
        assert_eq!(result.mapping.ignored, vec!["Shoe Size"]);
    }

    #[test]
    fn full_name_is_ignored_when_name_parts_exist() {
        let result = normalize_raw_table(&raw(
            &["Name", "First Name"],
            &[&["Smith, John", "Johnny"]],
        ));
        let record = &result.table.records[0];
        assert_eq!(record.first_name, "Johnny");
        assert_eq!(record.last_name, "");
    }

    #[test]
    fn split_names_fill_both_parts() {
        let result = normalize_raw_table(&raw(&["Employee Name"], &[&["Smith, John Michael Jr"]]));
        let record = &result.table.records[0];
        assert_eq!(record.first_name, "John");
        assert_eq!(record.last_name, "Smith Michael Jr");
    }

    #[test]
    fn record_fields_follow_field_normalizers() {
        let headers = [
            "First Name",
            "Last Name",
            "Sex",
            "DOB",
            "Zip",
            "Relationship",
            "Coverage",
            "Work Status",
            "Work Zip",
            "Medical Plan",
        ];
        let cells = [
            " John ",
            "Smith",
            "male",
            "1/15/1980 0:00",
            "2134-1111",
            "Employee",
            "EE&Children",
            "active",
            "123456",
            " PPO 500 ",
        ];
        let result = normalize_raw_table(&raw(&headers, &[&cells[..]]));
        let record = &result.table.records[0];
        for (field, cell) in CensusField::CANONICAL.iter().zip(cells) {
            assert_eq!(
                record.value(*field),
                normalize_field(*field, &RawCell::text(cell)),
                "{field}"
            );
        }
        assert_eq!(
            record.values(),
            ["John", "Smith", "M", "01/15/1980", "02134", "EE", "EC", "Active", "12345", "PPO 500"]
        );
    }

    #[test]
    fn empty_table_has_empty_issues() {
        let result = normalize_raw_table(&raw(&["First Name"], &[]));
        assert!(result.table.is_empty());
        assert!(result.issues.is_empty());
    }
}
