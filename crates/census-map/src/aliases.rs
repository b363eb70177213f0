//! Exact-match header aliases, keyed by cleaned label.

use census_model::CensusField;

/// Cleaned source label to census field, grouped by topic.
pub static HEADER_ALIASES: &[(&str, CensusField)] = &[
    // Names
    ("first name", CensusField::FirstName),
    ("firstname", CensusField::FirstName),
    ("fname", CensusField::FirstName),
    ("last name", CensusField::LastName),
    ("lastname", CensusField::LastName),
    ("lname", CensusField::LastName),
    ("surname", CensusField::LastName),
    ("full name", CensusField::FullName),
    ("employee name", CensusField::FullName),
    ("name", CensusField::FullName),
    // Demographics
    ("gender", CensusField::Gender),
    ("sex", CensusField::Gender),
    ("dob", CensusField::DateOfBirth),
    ("date of birth", CensusField::DateOfBirth),
    ("birth date", CensusField::DateOfBirth),
    // Address
    ("home zip code", CensusField::HomeZipCode),
    ("home zip", CensusField::HomeZipCode),
    ("zip", CensusField::HomeZipCode),
    ("zip code", CensusField::HomeZipCode),
    ("zipcode", CensusField::HomeZipCode),
    ("postal code", CensusField::HomeZipCode),
    ("work zip", CensusField::WorkZip),
    ("work zip code", CensusField::WorkZip),
    // Relationship
    ("member type", CensusField::MemberType),
    ("member", CensusField::MemberType),
    ("relationship", CensusField::MemberType),
    ("subscriber/dependent", CensusField::MemberType),
    // Coverage
    ("coverage tier", CensusField::CoverageTier),
    ("coverage", CensusField::CoverageTier),
    ("medical tier", CensusField::CoverageTier),
    // Status
    ("work status", CensusField::WorkStatus),
    ("employment status", CensusField::WorkStatus),
    ("subscriber employment status", CensusField::WorkStatus),
    // Plan
    ("current medical plan", CensusField::CurrentMedicalPlan),
    ("medical plan", CensusField::CurrentMedicalPlan),
];

/// Look up a cleaned label in the alias table.
pub fn lookup_alias(cleaned: &str) -> Option<CensusField> {
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, field)| *field)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn aliases_are_unique_and_clean() {
        let mut seen = BTreeSet::new();
        for (alias, _) in HEADER_ALIASES {
            assert!(seen.insert(*alias), "duplicate alias {alias}");
            assert_eq!(crate::clean_header_label(alias), *alias);
        }
    }

    #[test]
    fn every_canonical_field_has_an_alias() {
        for field in CensusField::CANONICAL {
            assert!(
                HEADER_ALIASES.iter().any(|(_, target)| *target == field),
                "no alias for {field}"
            );
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup_alias("sex"), Some(CensusField::Gender));
        assert_eq!(lookup_alias("Sex"), None);
        assert_eq!(lookup_alias("gender identity"), None);
    }
}
