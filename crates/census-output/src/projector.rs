//! Canonical records to carrier rows.

use census_model::{CarrierRecord, CarrierTable, CensusRecord, CensusTable, CensusTotals, MedicalTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Carrier rows plus the totals for the layout's summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierProjection {
    pub table: CarrierTable,
    pub totals: CensusTotals,
}

/// Running state of the single forward pass.
#[derive(Debug, Default)]
struct Accumulator {
    /// Medical tier of the most recent subscriber; dependents inherit it.
    subscriber_tier: Option<MedicalTier>,
    subscribers: usize,
    waived: usize,
}

impl Accumulator {
    fn project(&mut self, record: &CensusRecord) -> CarrierRecord {
        let subscriber = record.is_subscriber();
        if subscriber {
            self.subscriber_tier = record.coverage().map(MedicalTier::from_coverage);
            self.subscribers += 1;
            if self.subscriber_tier.is_some_and(|tier| tier.is_waived()) {
                self.waived += 1;
            }
        }
        CarrierRecord {
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
            home_zip_code: record.home_zip_code.clone(),
            date_of_birth: record.date_of_birth.clone(),
            gender: record.gender.clone(),
            medical_tier: self
                .subscriber_tier
                .map(|tier| tier.as_code().to_string())
                .unwrap_or_default(),
            dental_tier: String::new(),
            member_type: record.member_type.clone(),
            subscriber_employment_status: if subscriber {
                record.work_status.clone()
            } else {
                String::new()
            },
        }
    }
}

/// Project canonical records onto the carrier schema.
///
/// Rows stay in source order. A dependent listed before any subscriber gets
/// a blank medical tier.
pub fn project_carrier(table: &CensusTable) -> CarrierProjection {
    let mut acc = Accumulator::default();
    let records = table.iter().map(|record| acc.project(record)).collect();
    let totals = CensusTotals::from_counts(acc.subscribers, acc.waived);
    debug!(
        rows = table.len(),
        total_employees = totals.total_employees,
        total_enrolled = totals.total_enrolled,
        "carrier projection built"
    );
    CarrierProjection {
        table: CarrierTable { records },
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(member_type: &str, coverage: &str, status: &str) -> CensusRecord {
        CensusRecord {
            member_type: member_type.into(),
            coverage_tier: coverage.into(),
            work_status: status.into(),
            ..CensusRecord::default()
        }
    }

    fn tiers(projection: &CarrierProjection) -> Vec<&str> {
        projection
            .table
            .iter()
            .map(|record| record.medical_tier.as_str())
            .collect()
    }

    #[test]
    fn dependents_inherit_subscriber_tier() {
        let table = CensusTable::new(vec![
            member("EE", "FAM", "Active"),
            member("CH", "", ""),
            member("CH", "", ""),
        ]);
        let projection = project_carrier(&table);
        assert_eq!(tiers(&projection), vec!["EEFamily"; 3]);
        let statuses: Vec<&str> = projection
            .table
            .iter()
            .map(|record| record.subscriber_employment_status.as_str())
            .collect();
        assert_eq!(statuses, vec!["Active", "", ""]);
        assert_eq!(projection.totals.total_employees, 1);
        assert_eq!(projection.totals.total_enrolled, 1);
    }

    #[test]
    fn waived_subscriber_counts_but_is_not_enrolled() {
        let table = CensusTable::new(vec![member("EE", "WO", ""), member("EE", "EE", "Cobra")]);
        let projection = project_carrier(&table);
        assert_eq!(projection.totals, CensusTotals::from_counts(2, 1));
        assert_eq!(projection.totals.total_enrolled, 1);
    }

    #[test]
    fn all_waived_roster_has_nobody_enrolled() {
        let table = CensusTable::new(vec![member("EE", "WO", ""), member("EE", "WO", "")]);
        let totals = project_carrier(&table).totals;
        assert_eq!(totals.total_employees, 2);
        assert_eq!(totals.total_enrolled, 0);
    }

    #[test]
    fn leading_dependent_has_blank_tier() {
        let table = CensusTable::new(vec![
            member("SP", "", "Active"),
            member("EE", "ES", "Active"),
            member("SP", "", ""),
        ]);
        let projection = project_carrier(&table);
        assert_eq!(tiers(&projection), vec!["", "EESpOnly", "EESpOnly"]);
        assert_eq!(projection.table.records[0].subscriber_employment_status, "");
    }

    #[test]
    fn subscriber_without_tier_resets_inheritance() {
        let table = CensusTable::new(vec![
            member("EE", "FAM", ""),
            member("EE", "", ""),
            member("CH", "", ""),
        ]);
        assert_eq!(tiers(&project_carrier(&table)), vec!["EEFamily", "", ""]);
    }

    #[test]
    fn dental_tier_is_always_blank() {
        let table = CensusTable::new(vec![member("EE", "EE", "Active")]);
        let projection = project_carrier(&table);
        assert_eq!(projection.table.records[0].dental_tier, "");
    }
}
