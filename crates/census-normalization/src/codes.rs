//! Coded fields: gender, member type, coverage tier, work status.

use std::sync::LazyLock;

use census_model::{CoverageTier, Gender, MemberType, WorkStatus};
use regex::Regex;
use serde::{Deserialize, Serialize};

static PLUS_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\+\s*").expect("valid regex"));

/// Member type spellings (upper case) and their code.
pub static MEMBER_ALIASES: &[(&str, MemberType)] = &[
    ("EE", MemberType::Employee),
    ("E", MemberType::Employee),
    ("SUB", MemberType::Employee),
    ("SUBSCRIBER", MemberType::Employee),
    ("EMPLOYEE", MemberType::Employee),
    ("SP", MemberType::Spouse),
    ("S", MemberType::Spouse),
    ("SPOUSE", MemberType::Spouse),
    ("DOMESTIC PARTNER", MemberType::Spouse),
    ("DP", MemberType::Spouse),
    ("PARTNER", MemberType::Spouse),
    ("C", MemberType::Child),
    ("CH", MemberType::Child),
    ("CHILD", MemberType::Child),
    ("CHILDREN", MemberType::Child),
    ("KID", MemberType::Child),
    ("DEPENDENT", MemberType::Child),
];

/// Coverage tier spellings (upper case, `+` spaced) and their code.
pub static COVERAGE_ALIASES: &[(&str, CoverageTier)] = &[
    // Employee only
    ("E", CoverageTier::EmployeeOnly),
    ("EO", CoverageTier::EmployeeOnly),
    ("EMPLOYEE", CoverageTier::EmployeeOnly),
    ("EMPLOYEE ONLY", CoverageTier::EmployeeOnly),
    ("EEONLY", CoverageTier::EmployeeOnly),
    ("EE ONLY", CoverageTier::EmployeeOnly),
    ("EE", CoverageTier::EmployeeOnly),
    // Employee + spouse
    ("ES", CoverageTier::EmployeeSpouse),
    ("EMPLOYEE + SPOUSE", CoverageTier::EmployeeSpouse),
    ("EE + SPOUSE", CoverageTier::EmployeeSpouse),
    ("EESPONLY", CoverageTier::EmployeeSpouse),
    ("EES PONLY", CoverageTier::EmployeeSpouse),
    // Employee + child(ren)
    ("EC", CoverageTier::EmployeeChildren),
    ("EMPLOYEE + CHILD", CoverageTier::EmployeeChildren),
    ("EMPLOYEE + CHILDREN", CoverageTier::EmployeeChildren),
    ("EE + CHILD", CoverageTier::EmployeeChildren),
    ("EE + CHILDREN", CoverageTier::EmployeeChildren),
    ("EECHREN", CoverageTier::EmployeeChildren),
    // Family
    ("F", CoverageTier::Family),
    ("FAM", CoverageTier::Family),
    ("FAMILY", CoverageTier::Family),
    ("EE + FAMILY", CoverageTier::Family),
    // Waive
    ("WO", CoverageTier::Waived),
    ("WAIVE", CoverageTier::Waived),
    ("WAIVED", CoverageTier::Waived),
    ("WAV", CoverageTier::Waived),
    ("NONE", CoverageTier::Waived),
    ("NO COVERAGE", CoverageTier::Waived),
];

/// `M`/`MALE` and `F`/`FEMALE`, any case; anything else is blank.
pub fn normalize_gender(value: &str) -> String {
    match value.trim().to_uppercase().as_str() {
        "M" | "MALE" => Gender::Male.as_code().to_string(),
        "F" | "FEMALE" => Gender::Female.as_code().to_string(),
        _ => String::new(),
    }
}

/// Map a relationship label to `EE`, `SP` or `CH`.
///
/// Unknown non-empty labels are usually job titles typed into the wrong
/// column, so they count as employees.
pub fn normalize_member_type(value: &str) -> String {
    let key = value.trim().to_uppercase();
    if key.is_empty() {
        return String::new();
    }
    MEMBER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(MemberType::Employee, |(_, member)| *member)
        .as_code()
        .to_string()
}

fn lookup_coverage(key: &str) -> Option<CoverageTier> {
    COVERAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, tier)| *tier)
}

/// Map a coverage label to `EE`, `ES`, `EC`, `FAM` or `WO`; unknown is blank.
///
/// `&` reads as `+`, and `+` is compared with single spaces around it.
pub fn normalize_coverage_tier(value: &str) -> String {
    let upper = value.trim().to_uppercase().replace('&', "+");
    if upper.is_empty() {
        return String::new();
    }
    let spaced = PLUS_SPACING.replace_all(&upper, " + ");
    lookup_coverage(&spaced)
        .or_else(|| CoverageTier::from_code(&spaced))
        .map(|tier| tier.as_code().to_string())
        .unwrap_or_default()
}

/// Normalized work status plus the warning for a dropped value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOutcome {
    pub value: String,
    pub warning: Option<String>,
}

/// Keep `Active` and `Cobra`; any other status is blanked with a warning.
pub fn normalize_work_status(value: &str) -> StatusOutcome {
    let key = value.trim().to_uppercase();
    match key.as_str() {
        "" => StatusOutcome::default(),
        "ACTIVE" => StatusOutcome {
            value: WorkStatus::Active.as_code().to_string(),
            warning: None,
        },
        "COBRA" => StatusOutcome {
            value: WorkStatus::Cobra.as_code().to_string(),
            warning: None,
        },
        _ => StatusOutcome {
            value: String::new(),
            warning: Some(format!(
                "Ignored non-supported Work Status '{value}' (only Active/Cobra kept)"
            )),
        },
    }
}
