#![deny(unsafe_code)]

//! Census normalization pipeline.
//!
//! # Stages
//!
//! 1. **Load** - read the source into a raw table (the only fatal stage)
//! 2. **Resolve** - map source headers to census fields
//! 3. **Split names** - only when the source has Full Name but no name parts
//! 4. **Normalize** - canonicalize every field of every row
//! 5. **Validate** - row rules plus the warnings from stages 3 and 4
//!
//! # Example
//!
//! ```ignore
//! use census_core::{CensusSource, normalize_and_validate};
//!
//! let result = normalize_and_validate(CensusSource::path("census.csv"))?;
//! for issue in &result.issues {
//!     println!("row {}: {}", issue.row, issue.message);
//! }
//! ```

pub mod pipeline;
pub mod privacy;

pub use census_ingest::{CensusSource, IngestOptions};
pub use pipeline::{
    NormalizationResult, RunSummary, normalize_and_validate, normalize_and_validate_with,
    normalize_raw_table,
};
pub use privacy::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
