use census_model::{CensusRecord, CoverageTier};

/// A per-row business rule.
#[derive(Debug, Clone, Copy)]
pub struct RowRule {
    pub id: &'static str,
    pub message: &'static str,
    /// Returns true when the record violates the rule.
    pub fails: fn(&CensusRecord) -> bool,
}

fn missing_first_name(record: &CensusRecord) -> bool {
    record.first_name.is_empty()
}

fn missing_last_name(record: &CensusRecord) -> bool {
    record.last_name.is_empty()
}

fn invalid_member_type(record: &CensusRecord) -> bool {
    record.member().is_none()
}

fn invalid_coverage_tier(record: &CensusRecord) -> bool {
    !record.coverage_tier.is_empty() && CoverageTier::from_code(&record.coverage_tier).is_none()
}

fn subscriber_missing_dob(record: &CensusRecord) -> bool {
    record.is_subscriber() && record.date_of_birth.is_empty()
}

fn subscriber_missing_zip(record: &CensusRecord) -> bool {
    record.is_subscriber() && record.home_zip_code.is_empty()
}

fn dependent_with_work_status(record: &CensusRecord) -> bool {
    !record.is_subscriber() && !record.work_status.is_empty()
}

/// Row rules in reporting order.
pub static ROW_RULES: &[RowRule] = &[
    RowRule {
        id: "first_name_required",
        message: "Missing First Name",
        fails: missing_first_name,
    },
    RowRule {
        id: "last_name_required",
        message: "Missing Last Name",
        fails: missing_last_name,
    },
    RowRule {
        id: "member_type_code",
        message: "Member Type must be EE/SP/CH",
        fails: invalid_member_type,
    },
    RowRule {
        id: "coverage_tier_code",
        message: "Coverage Tier invalid",
        fails: invalid_coverage_tier,
    },
    RowRule {
        id: "subscriber_dob_required",
        message: "Subscriber missing DOB",
        fails: subscriber_missing_dob,
    },
    RowRule {
        id: "subscriber_zip_required",
        message: "Subscriber missing Home Zip",
        fails: subscriber_missing_zip,
    },
    RowRule {
        id: "dependent_work_status_blank",
        message: "Work Status should be blank for non-EE",
        fails: dependent_with_work_status,
    },
];
