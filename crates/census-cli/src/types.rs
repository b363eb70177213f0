//! Reports returned by the CLI commands.

use std::path::PathBuf;

use census_core::RunSummary;
use census_map::MatchMethod;
use census_model::{CensusField, CensusTotals, IssueTable, SheetMetadata};
use serde::Serialize;

/// Result of `census normalize`.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    pub source: String,
    pub summary: RunSummary,
    pub issues: IssueTable,
    /// Files written; empty on a dry run.
    pub outputs: Vec<PathBuf>,
}

/// Result of `census convert`.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub source: String,
    pub summary: RunSummary,
    /// Company block after command-line overrides.
    pub metadata: SheetMetadata,
    pub totals: CensusTotals,
    pub carrier_rows: usize,
    /// Layout file name, whether or not it was written.
    pub file_name: String,
    pub issues: IssueTable,
    pub outputs: Vec<PathBuf>,
}

/// What happened to one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStatus {
    Mapped,
    /// Resolved, but a later column claimed the same field.
    Superseded,
    Ignored,
}

/// Resolution of one source header.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub index: usize,
    pub label: String,
    pub cleaned: String,
    pub field: Option<CensusField>,
    pub method: Option<MatchMethod>,
    pub status: HeaderStatus,
}
