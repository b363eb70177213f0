#![deny(unsafe_code)]

//! Census row validation.
//!
//! Each canonical record is checked against [`ROW_RULES`]; every failing rule
//! contributes one message and a row's messages are joined into a single
//! issue. Warnings raised earlier in the pipeline (name splitting, dropped
//! work statuses) are merged into the same [`IssueTable`](census_model::IssueTable).

mod engine;
mod rules;

pub use engine::{RowWarning, row_problems, validate_rows};
pub use rules::{ROW_RULES, RowRule};
