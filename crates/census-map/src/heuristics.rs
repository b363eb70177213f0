//! Fallback rules for labels the alias table does not know.

use census_model::CensusField;

/// A predicate on a cleaned label and the field it selects.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicRule {
    pub name: &'static str,
    pub target: CensusField,
    pub matches: fn(&str) -> bool,
}

fn starts_with_gender(label: &str) -> bool {
    label.starts_with("gender")
}

fn is_birth_date(label: &str) -> bool {
    matches!(label, "dob" | "date of birth" | "birth date")
}

fn starts_with_home_zip(label: &str) -> bool {
    label.starts_with("home zip")
}

fn starts_with_work_zip(label: &str) -> bool {
    label.starts_with("work zip")
}

fn starts_with_coverage(label: &str) -> bool {
    label.starts_with("coverage")
}

fn starts_with_status(label: &str) -> bool {
    label.starts_with("employment status") || label.starts_with("work status")
}

fn is_full_name(label: &str) -> bool {
    matches!(label, "fullname" | "full name" | "employee name" | "name")
}

/// Evaluated in order; the first match wins.
pub static HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        name: "starts with 'gender'",
        target: CensusField::Gender,
        matches: starts_with_gender,
    },
    HeuristicRule {
        name: "birth date spelling",
        target: CensusField::DateOfBirth,
        matches: is_birth_date,
    },
    HeuristicRule {
        name: "starts with 'home zip'",
        target: CensusField::HomeZipCode,
        matches: starts_with_home_zip,
    },
    HeuristicRule {
        name: "starts with 'work zip'",
        target: CensusField::WorkZip,
        matches: starts_with_work_zip,
    },
    HeuristicRule {
        name: "starts with 'coverage'",
        target: CensusField::CoverageTier,
        matches: starts_with_coverage,
    },
    HeuristicRule {
        name: "starts with a status label",
        target: CensusField::WorkStatus,
        matches: starts_with_status,
    },
    HeuristicRule {
        name: "full name spelling",
        target: CensusField::FullName,
        matches: is_full_name,
    },
];

/// First heuristic rule matching a cleaned label.
pub fn apply_heuristics(cleaned: &str) -> Option<&'static HeuristicRule> {
    HEURISTIC_RULES.iter().find(|rule| (rule.matches)(cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_rules_catch_decorated_labels() {
        let target = |label| apply_heuristics(label).map(|rule| rule.target);
        assert_eq!(target("gender m/f"), Some(CensusField::Gender));
        assert_eq!(target("home zip 5 digit"), Some(CensusField::HomeZipCode));
        assert_eq!(target("work zipcode"), Some(CensusField::WorkZip));
        assert_eq!(target("coverage level"), Some(CensusField::CoverageTier));
        assert_eq!(target("work status code"), Some(CensusField::WorkStatus));
        assert_eq!(target("fullname"), Some(CensusField::FullName));
    }

    #[test]
    fn unrelated_labels_miss() {
        assert!(apply_heuristics("employee id").is_none());
        assert!(apply_heuristics("salary").is_none());
        assert!(apply_heuristics("first").is_none());
    }
}
