//! Data model for employer census conversion.
//!
//! The types here describe every table that flows through the pipeline:
//!
//! - [`RawTable`]: the source sheet as loaded, one [`RawCell`] per column
//! - [`CensusTable`]: canonical records in the fixed 10-column schema
//! - [`IssueTable`]: row-level validation issues and warnings
//! - [`CarrierTable`]: the carrier projection plus [`CensusTotals`]
//! - [`SheetMetadata`]: company block attached above the carrier table

pub mod carrier;
pub mod codes;
pub mod field;
pub mod issue;
pub mod metadata;
pub mod raw;
pub mod record;

pub use carrier::{CARRIER_HEADERS, CARRIER_SHEET_NAME, CarrierRecord, CarrierTable, CensusTotals};
pub use codes::{CoverageTier, Gender, MedicalTier, MemberType, WorkStatus};
pub use field::CensusField;
pub use issue::{CensusIssue, ISSUE_HEADERS, IssueTable};
pub use metadata::SheetMetadata;
pub use raw::{RawCell, RawTable, format_numeric};
pub use record::{CensusRecord, CensusTable};
