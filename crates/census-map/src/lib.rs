#![deny(unsafe_code)]

//! Header resolution for census sheets.
//!
//! Source labels are cleaned ([`clean_header_label`]), matched against a
//! static alias table, then against a short ordered list of heuristic rules.
//! Labels that match nothing are ignored.

mod aliases;
mod clean;
mod heuristics;
mod resolver;
mod types;

pub use aliases::{HEADER_ALIASES, lookup_alias};
pub use clean::clean_header_label;
pub use heuristics::{HEURISTIC_RULES, HeuristicRule, apply_heuristics};
pub use resolver::{resolve_columns, resolve_header};
pub use types::{ColumnAssignment, ColumnMapping, MatchMethod};
