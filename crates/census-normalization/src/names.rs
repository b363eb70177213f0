//! Full-name decomposition.
//!
//! Handles `Last, First Middle Suffix` and `First Middle Last Suffix`.
//! Middle names end up in the last name, which is what carriers expect.

use serde::{Deserialize, Serialize};

const SUFFIXES: [&str; 6] = ["JR", "SR", "II", "III", "IV", "V"];

pub const EMPTY_FIRST_NAME: &str = "Full Name split yielded empty first name";
pub const SINGLE_TOKEN: &str = "Full Name has single token; treated as last name";
pub const SUFFIX_ONLY: &str = "Name missing core last name; suffix only";

/// First and last name recovered from a full name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSplit {
    pub first: String,
    pub last: String,
    pub warnings: Vec<String>,
}

impl NameSplit {
    fn new(first: &str, last: String) -> Self {
        Self {
            first: first.to_string(),
            last,
            warnings: Vec::new(),
        }
    }

    fn with_warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

fn is_suffix(token: &str) -> bool {
    let key = token.to_uppercase();
    SUFFIXES.contains(&key.trim_matches('.'))
}

/// Split tokens after the first name into (core, suffix), keeping order.
fn partition_tail<'a>(tail: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    tail.iter().partition(|token| !is_suffix(token))
}

/// Split a full name into first and last name.
pub fn split_full_name(name: &str) -> NameSplit {
    let name = name.trim();
    if name.is_empty() {
        return NameSplit::default();
    }

    if let Some((last, rest)) = name.split_once(',') {
        let last = last.trim();
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        let Some((first, tail)) = tokens.split_first() else {
            return NameSplit::new("", last.to_string()).with_warning(EMPTY_FIRST_NAME);
        };
        let (middle, suffix) = partition_tail(tail);
        let parts: Vec<&str> = std::iter::once(last)
            .chain(middle)
            .chain(suffix)
            .collect();
        return NameSplit::new(first, parts.join(" "));
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.as_slice() {
        [only] => NameSplit::new("", (*only).to_string()).with_warning(SINGLE_TOKEN),
        [first, tail @ ..] => {
            let (core, suffix) = partition_tail(tail);
            if core.is_empty() {
                return NameSplit::new(first, suffix.join(" ")).with_warning(SUFFIX_ONLY);
            }
            let parts: Vec<&str> = core.into_iter().chain(suffix).collect();
            NameSplit::new(first, parts.join(" "))
        }
        [] => NameSplit::default(),
    }
}
