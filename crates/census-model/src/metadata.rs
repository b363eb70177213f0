use serde::{Deserialize, Serialize};

/// Company block printed above the carrier table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMetadata {
    pub company: String,
    pub address: String,
    pub fein: String,
    pub sic: String,
}

impl SheetMetadata {
    /// Labelled entries in layout order (rows 1-4).
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Company Name:", self.company.as_str()),
            ("Address:", self.address.as_str()),
            ("FEIN:", self.fein.as_str()),
            ("SIC Code:", self.sic.as_str()),
        ]
    }

    /// Replace fields with any non-empty override.
    pub fn merged_with(mut self, overrides: &SheetMetadata) -> Self {
        for (target, value) in [
            (&mut self.company, &overrides.company),
            (&mut self.address, &overrides.address),
            (&mut self.fein, &overrides.fein),
            (&mut self.sic, &overrides.sic),
        ] {
            if !value.trim().is_empty() {
                *target = value.trim().to_string();
            }
        }
        self
    }
}
