//! Canonical census fields and their display labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field a source column can resolve to.
///
/// Every variant except [`CensusField::FullName`] is part of the canonical
/// schema. Full Name only exists on the way in: it is split into first and
/// last name and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CensusField {
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    HomeZipCode,
    MemberType,
    CoverageTier,
    WorkStatus,
    WorkZip,
    CurrentMedicalPlan,
    FullName,
}

impl CensusField {
    /// Canonical schema columns, in output order.
    pub const CANONICAL: [CensusField; 10] = [
        CensusField::FirstName,
        CensusField::LastName,
        CensusField::Gender,
        CensusField::DateOfBirth,
        CensusField::HomeZipCode,
        CensusField::MemberType,
        CensusField::CoverageTier,
        CensusField::WorkStatus,
        CensusField::WorkZip,
        CensusField::CurrentMedicalPlan,
    ];

    /// Column label as it appears in the canonical table.
    pub fn label(&self) -> &'static str {
        match self {
            CensusField::FirstName => "First Name",
            CensusField::LastName => "Last Name",
            CensusField::Gender => "Gender",
            CensusField::DateOfBirth => "Date of Birth",
            CensusField::HomeZipCode => "Home Zip Code",
            CensusField::MemberType => "Member Type",
            CensusField::CoverageTier => "Coverage Tier",
            CensusField::WorkStatus => "Work Status",
            CensusField::WorkZip => "Work Zip",
            CensusField::CurrentMedicalPlan => "Current Medical Plan",
            CensusField::FullName => "Full Name",
        }
    }

    /// Returns true for the ten fields of the canonical schema.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, CensusField::FullName)
    }
}

impl fmt::Display for CensusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_labels() {
        let labels: Vec<&str> = CensusField::CANONICAL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "First Name",
                "Last Name",
                "Gender",
                "Date of Birth",
                "Home Zip Code",
                "Member Type",
                "Coverage Tier",
                "Work Status",
                "Work Zip",
                "Current Medical Plan",
            ]
        );
    }

    #[test]
    fn full_name_is_not_canonical() {
        assert!(!CensusField::FullName.is_canonical());
        assert!(CensusField::CANONICAL.iter().all(CensusField::is_canonical));
    }
}
