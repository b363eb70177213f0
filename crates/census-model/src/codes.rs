//! Canonical code sets for coded census fields.
//!
//! Canonical records store these codes as text so that an empty string can
//! stand for "no value". `from_code` on member type and coverage tier only
//! accepts the exact canonical code; lenient matching of vendor spellings
//! lives in the normalizers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender code (`M` / `F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Member type: the subscriber or one of their dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    /// Subscriber (`EE`).
    Employee,
    /// Spouse or domestic partner (`SP`).
    Spouse,
    /// Child dependent (`CH`).
    Child,
}

impl MemberType {
    pub const ALL: [MemberType; 3] = [MemberType::Employee, MemberType::Spouse, MemberType::Child];

    pub fn as_code(&self) -> &'static str {
        match self {
            MemberType::Employee => "EE",
            MemberType::Spouse => "SP",
            MemberType::Child => "CH",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        MemberType::ALL
            .into_iter()
            .find(|member| member.as_code() == code)
    }

    pub fn is_subscriber(&self) -> bool {
        matches!(self, MemberType::Employee)
    }
}

/// Coverage tier elected by a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageTier {
    /// Employee only (`EE`).
    EmployeeOnly,
    /// Employee + child(ren) (`EC`).
    EmployeeChildren,
    /// Employee + spouse (`ES`).
    EmployeeSpouse,
    /// Family (`FAM`).
    Family,
    /// Waived coverage (`WO`).
    Waived,
}

impl CoverageTier {
    pub const ALL: [CoverageTier; 5] = [
        CoverageTier::EmployeeOnly,
        CoverageTier::EmployeeChildren,
        CoverageTier::EmployeeSpouse,
        CoverageTier::Family,
        CoverageTier::Waived,
    ];

    pub fn as_code(&self) -> &'static str {
        match self {
            CoverageTier::EmployeeOnly => "EE",
            CoverageTier::EmployeeChildren => "EC",
            CoverageTier::EmployeeSpouse => "ES",
            CoverageTier::Family => "FAM",
            CoverageTier::Waived => "WO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        CoverageTier::ALL
            .into_iter()
            .find(|tier| tier.as_code() == code)
    }
}

/// Employment status kept for subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStatus {
    Active,
    Cobra,
}

impl WorkStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            WorkStatus::Active => "Active",
            WorkStatus::Cobra => "Cobra",
        }
    }
}

/// Carrier medical tier derived from a subscriber's coverage tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicalTier {
    EmployeeOnly,
    EmployeeSpouse,
    EmployeeChildren,
    Family,
    Waive,
}

impl MedicalTier {
    /// Carrier code written to the output layout.
    pub fn as_code(&self) -> &'static str {
        match self {
            MedicalTier::EmployeeOnly => "EEOnly",
            MedicalTier::EmployeeSpouse => "EESpOnly",
            MedicalTier::EmployeeChildren => "EEChren",
            MedicalTier::Family => "EEFamily",
            MedicalTier::Waive => "Waive",
        }
    }

    /// Fixed carrier tier table.
    pub fn from_coverage(tier: CoverageTier) -> Self {
        match tier {
            CoverageTier::EmployeeOnly => MedicalTier::EmployeeOnly,
            CoverageTier::EmployeeSpouse => MedicalTier::EmployeeSpouse,
            CoverageTier::EmployeeChildren => MedicalTier::EmployeeChildren,
            CoverageTier::Family => MedicalTier::Family,
            CoverageTier::Waived => MedicalTier::Waive,
        }
    }

    pub fn is_waived(&self) -> bool {
        matches!(self, MedicalTier::Waive)
    }
}

macro_rules! display_as_code {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_code())
                }
            }
        )*
    };
}

display_as_code!(Gender, MemberType, CoverageTier, WorkStatus, MedicalTier);
