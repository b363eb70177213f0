//! Field normalizers for census rows.
//!
//! Every normalizer is total: unrecognized input becomes the empty string
//! (or, for member type, `EE`) and never an error. Work status is the one
//! field that also reports a warning, see [`StatusOutcome`].

pub mod codes;
pub mod date;
pub mod names;
pub mod text;
pub mod zip;

use census_model::{CensusField, RawCell};

pub use codes::{
    COVERAGE_ALIASES, MEMBER_ALIASES, StatusOutcome, normalize_coverage_tier, normalize_gender,
    normalize_member_type, normalize_work_status,
};
pub use date::{excel_serial_to_date, normalize_dob, parse_date_text};
pub use names::{NameSplit, split_full_name};
pub use text::normalize_text;
pub use zip::normalize_zip;

/// Normalize one cell for a canonical field.
///
/// Work status warnings are dropped here; use [`normalize_work_status`]
/// when the warning matters. Full Name is passed through as trimmed text.
pub fn normalize_field(field: CensusField, cell: &RawCell) -> String {
    match field {
        CensusField::FirstName
        | CensusField::LastName
        | CensusField::CurrentMedicalPlan
        | CensusField::FullName => normalize_text(cell),
        CensusField::Gender => normalize_gender(&cell.to_text()),
        CensusField::DateOfBirth => normalize_dob(cell),
        CensusField::HomeZipCode | CensusField::WorkZip => normalize_zip(cell),
        CensusField::MemberType => normalize_member_type(&cell.to_text()),
        CensusField::CoverageTier => normalize_coverage_tier(&cell.to_text()),
        CensusField::WorkStatus => normalize_work_status(&cell.to_text()).value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_field() {
        assert_eq!(normalize_field(CensusField::Gender, &"female".into()), "F");
        assert_eq!(normalize_field(CensusField::WorkZip, &RawCell::Number(2134.0)), "02134");
        assert_eq!(normalize_field(CensusField::WorkStatus, &"Retired".into()), "");
        assert_eq!(
            normalize_field(CensusField::CurrentMedicalPlan, &"  PPO 500 ".into()),
            "PPO 500"
        );
    }
}
