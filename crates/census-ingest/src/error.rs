//! Error types for census ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading a census source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("census file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV content.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// Source has no rows at all.
    #[error("census source is empty: {origin}")]
    EmptyInput { origin: String },

    /// Header row is missing or blank.
    #[error("no header found at row {header_row} in {origin}")]
    NoHeader { origin: String, header_row: usize },

    // === Option Errors ===
    /// Header/data row selection is inconsistent.
    #[error(
        "invalid row selection: header row {header_row}, first data row {first_data_row} \
         (rows are 1-based and data must start below the header)"
    )]
    InvalidRowSelection {
        header_row: usize,
        first_data_row: usize,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
