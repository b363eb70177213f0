use census_model::CensusField;
use tracing::{debug, trace};

use crate::aliases::lookup_alias;
use crate::clean::clean_header_label;
use crate::heuristics::apply_heuristics;
use crate::types::{ColumnAssignment, ColumnMapping, MatchMethod};

/// Resolve one source label: alias table first, then heuristics.
pub fn resolve_header(label: &str) -> Option<(CensusField, MatchMethod)> {
    let cleaned = clean_header_label(label);
    if let Some(field) = lookup_alias(&cleaned) {
        return Some((field, MatchMethod::Alias));
    }
    apply_heuristics(&cleaned).map(|rule| {
        trace!(label, rule = rule.name, "heuristic header match");
        (rule.target, MatchMethod::Heuristic)
    })
}

/// Map every source header to a census field or to the ignored list.
///
/// When two columns resolve to the same field the later one wins and the
/// earlier binding is dropped.
pub fn resolve_columns(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();
    for (index, label) in headers.iter().enumerate() {
        let Some((field, method)) = resolve_header(label) else {
            mapping.ignored.push(label.clone());
            continue;
        };
        if let Some(position) = mapping
            .assignments
            .iter()
            .position(|entry| entry.field == field)
        {
            let replaced = mapping.assignments.remove(position);
            debug!(
                field = %field,
                dropped = %replaced.label,
                kept = %label,
                "duplicate header target, keeping the later column"
            );
        }
        mapping.assignments.push(ColumnAssignment {
            index,
            label: label.clone(),
            field,
            method,
        });
    }
    mapping
}
