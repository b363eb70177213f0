//! Canonical census records.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};
use serde::{Deserialize, Serialize};

use crate::codes::{CoverageTier, MemberType};
use crate::field::CensusField;

/// One person-row in the canonical schema.
///
/// Every field is always present. An empty string means the source had no
/// usable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusRecord {
    pub first_name: String,
    pub last_name: String,
    /// `M`, `F`, or empty.
    pub gender: String,
    /// `MM/DD/YYYY` or empty.
    pub date_of_birth: String,
    /// Five digits or empty.
    pub home_zip_code: String,
    /// `EE`, `SP`, `CH`, or empty.
    pub member_type: String,
    /// `EE`, `EC`, `ES`, `FAM`, `WO`, or empty.
    pub coverage_tier: String,
    /// `Active`, `Cobra`, or empty.
    pub work_status: String,
    /// Five digits or empty.
    pub work_zip: String,
    pub current_medical_plan: String,
}

impl CensusRecord {
    /// Value of a canonical field. Full Name is never stored and reads as empty.
    pub fn value(&self, field: CensusField) -> &str {
        match field {
            CensusField::FirstName => &self.first_name,
            CensusField::LastName => &self.last_name,
            CensusField::Gender => &self.gender,
            CensusField::DateOfBirth => &self.date_of_birth,
            CensusField::HomeZipCode => &self.home_zip_code,
            CensusField::MemberType => &self.member_type,
            CensusField::CoverageTier => &self.coverage_tier,
            CensusField::WorkStatus => &self.work_status,
            CensusField::WorkZip => &self.work_zip,
            CensusField::CurrentMedicalPlan => &self.current_medical_plan,
            CensusField::FullName => "",
        }
    }

    pub fn member(&self) -> Option<MemberType> {
        MemberType::from_code(&self.member_type)
    }

    pub fn coverage(&self) -> Option<CoverageTier> {
        CoverageTier::from_code(&self.coverage_tier)
    }

    /// True when the record is a subscriber (`EE`).
    pub fn is_subscriber(&self) -> bool {
        self.member().is_some_and(|member| member.is_subscriber())
    }

    /// Values in canonical column order.
    pub fn values(&self) -> [&str; 10] {
        CensusField::CANONICAL.map(|field| self.value(field))
    }
}

/// The canonical table: one record per source data row, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusTable {
    pub records: Vec<CensusRecord>,
}

impl CensusTable {
    pub fn new(records: Vec<CensusRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CensusRecord> {
        self.records.iter()
    }

    /// Column labels in canonical order.
    pub fn headers() -> [&'static str; 10] {
        CensusField::CANONICAL.map(|field| field.label())
    }

    /// Build a string-typed DataFrame with the canonical columns.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = CensusField::CANONICAL
            .iter()
            .map(|field| {
                let values: Vec<&str> = self.records.iter().map(|r| r.value(*field)).collect();
                Series::new(field.label().into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns)
    }
}

impl<'a> IntoIterator for &'a CensusTable {
    type Item = &'a CensusRecord;
    type IntoIter = std::slice::Iter<'a, CensusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
