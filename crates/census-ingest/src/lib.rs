//! Census data ingestion.
//!
//! Loading is the only fatal stage of the conversion pipeline: anything that
//! cannot be turned into a [`RawTable`](census_model::RawTable) is reported as
//! an [`IngestError`] and nothing downstream runs.
//!
//! # Features
//!
//! - **CSV Loading**: read a sheet export from a path or from in-memory bytes
//! - **Row Selection**: pick the header row and first data row explicitly
//! - **DataFrame Input**: accept an already-loaded Polars `DataFrame`
//! - **Sheet Metadata**: read the company block from fixed cells (C5, C6, C8, E7)
//! - **Fingerprints**: SHA-256 of the input bytes for memoization by callers
//!
//! # Example
//!
//! ```ignore
//! use census_ingest::{CensusSource, IngestOptions, load_source};
//!
//! let loaded = load_source(CensusSource::path("census.csv"), &IngestOptions::default())?;
//! println!("{} rows", loaded.table.height());
//! ```

mod error;
mod fingerprint;
mod frame;
mod grid;
mod metadata;
mod options;
mod source;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Grid + Table Reading ===
pub use grid::{CellGrid, parse_cell_ref, read_csv_grid};
pub use options::IngestOptions;
pub use table::table_from_grid;

// === DataFrame Input ===
pub use frame::{cell_from_any, raw_table_from_frame};

// === Sources ===
pub use source::{CensusSource, LoadedSource, load_source};

// === Metadata ===
pub use metadata::{clean_metadata_value, read_sheet_metadata};

// === Fingerprints ===
pub use fingerprint::content_fingerprint;
