use census_model::CensusField;
use serde::{Deserialize, Serialize};

/// How a source label was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Alias,
    Heuristic,
}

/// One source column bound to a census field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Position of the column in the source header row.
    pub index: usize,
    /// Label as it appears in the source.
    pub label: String,
    pub field: CensusField,
    pub method: MatchMethod,
}

/// Resolved columns of a source table.
///
/// At most one assignment per field, ordered by source position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub assignments: Vec<ColumnAssignment>,
    /// Source labels that resolved to nothing.
    pub ignored: Vec<String>,
}

impl ColumnMapping {
    pub fn assignment(&self, field: CensusField) -> Option<&ColumnAssignment> {
        self.assignments.iter().find(|entry| entry.field == field)
    }

    /// Source column index bound to `field`.
    pub fn column_for(&self, field: CensusField) -> Option<usize> {
        self.assignment(field).map(|entry| entry.index)
    }

    pub fn contains(&self, field: CensusField) -> bool {
        self.assignment(field).is_some()
    }

    /// Full Name is only split when neither name part has its own column.
    pub fn needs_name_split(&self) -> bool {
        self.contains(CensusField::FullName)
            && !self.contains(CensusField::FirstName)
            && !self.contains(CensusField::LastName)
    }

    /// Canonical fields with no source column.
    pub fn missing_fields(&self) -> Vec<CensusField> {
        CensusField::CANONICAL
            .into_iter()
            .filter(|field| !self.contains(*field))
            .collect()
    }
}
