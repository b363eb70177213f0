use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Row selection for a sheet export.
///
/// Both rows are 1-based, the way a spreadsheet numbers them. Rows between
/// the header and the first data row (instructions, sub-headers) are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    pub header_row: usize,
    pub first_data_row: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_row: 1,
            first_data_row: 2,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header row; the first data row follows it unless set later.
    #[must_use]
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self.first_data_row = header_row + 1;
        self
    }

    #[must_use]
    pub fn with_first_data_row(mut self, first_data_row: usize) -> Self {
        self.first_data_row = first_data_row;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.header_row == 0 || self.first_data_row <= self.header_row {
            return Err(IngestError::InvalidRowSelection {
                header_row: self.header_row,
                first_data_row: self.first_data_row,
            });
        }
        Ok(())
    }

    /// Zero-based index of the header line.
    pub fn header_index(&self) -> usize {
        self.header_row.saturating_sub(1)
    }

    /// Zero-based index of the first data line.
    pub fn data_index(&self) -> usize {
        self.first_data_row.saturating_sub(1)
    }
}
