//! Carrier output records and roster totals.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};
use serde::{Deserialize, Serialize};

/// Sheet name of the carrier layout.
pub const CARRIER_SHEET_NAME: &str = "Census Input";

/// Carrier column headers, in the order the carrier requires.
///
/// The trailing blank header is a placeholder column the carrier's import
/// expects to find.
pub const CARRIER_HEADERS: [&str; 10] = [
    "Last Name",
    "First Name",
    "Home Zip Code",
    "Date of Birth",
    "Gender",
    "Medical Tier",
    "Dental Tier",
    "Member Type",
    "Subscriber Employment Status",
    "",
];

/// One output row, projected from a canonical record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRecord {
    pub last_name: String,
    pub first_name: String,
    pub home_zip_code: String,
    pub date_of_birth: String,
    pub gender: String,
    pub medical_tier: String,
    pub dental_tier: String,
    pub member_type: String,
    pub subscriber_employment_status: String,
}

impl CarrierRecord {
    /// Values in carrier column order, including the trailing blank column.
    pub fn values(&self) -> [&str; 10] {
        [
            &self.last_name,
            &self.first_name,
            &self.home_zip_code,
            &self.date_of_birth,
            &self.gender,
            &self.medical_tier,
            &self.dental_tier,
            &self.member_type,
            &self.subscriber_employment_status,
            "",
        ]
    }
}

/// Subscriber counts printed in the layout's totals line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusTotals {
    pub total_employees: usize,
    pub waived: usize,
    pub total_enrolled: usize,
}

impl CensusTotals {
    /// Totals from subscriber and waived counts; enrolled never goes below zero.
    pub fn from_counts(total_employees: usize, waived: usize) -> Self {
        Self {
            total_employees,
            waived,
            total_enrolled: total_employees.saturating_sub(waived),
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Total Employees: {} | Total Enrolled: {}",
            self.total_employees, self.total_enrolled
        )
    }
}

/// Carrier table, 1:1 and order-preserving with the canonical table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierTable {
    pub records: Vec<CarrierRecord>,
}

impl CarrierTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CarrierRecord> {
        self.records.iter()
    }

    /// Build a string-typed DataFrame in carrier column order.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = CARRIER_HEADERS
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let values: Vec<&str> = self.records.iter().map(|r| r.values()[idx]).collect();
                Series::new((*header).into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns)
    }
}
