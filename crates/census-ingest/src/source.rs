//! Census sources and the fatal loading stage.

use std::path::{Path, PathBuf};

use census_model::{RawTable, SheetMetadata};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::fingerprint::content_fingerprint;
use crate::frame::raw_table_from_frame;
use crate::grid::{CellGrid, read_csv_grid};
use crate::metadata::read_sheet_metadata;
use crate::options::IngestOptions;
use crate::table::table_from_grid;

/// Where census rows come from.
#[derive(Debug, Clone)]
pub enum CensusSource {
    /// A CSV export on disk.
    Path(PathBuf),
    /// CSV bytes already in memory, with a name used in messages.
    Bytes { name: String, bytes: Vec<u8> },
    /// A table already split into headers and cells.
    RawTable(RawTable),
    /// A DataFrame loaded by the caller.
    DataFrame(DataFrame),
}

impl CensusSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Human-readable origin used in errors and logs.
    pub fn origin(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Bytes { name, .. } => name.clone(),
            Self::RawTable(_) => "<raw table>".to_string(),
            Self::DataFrame(_) => "<dataframe>".to_string(),
        }
    }
}

/// A loaded source: the selected table plus what was found around it.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub origin: String,
    pub table: RawTable,
    /// Full sheet grid, only for CSV sources.
    pub grid: Option<CellGrid>,
    /// SHA-256 of the input bytes, only for CSV sources.
    pub fingerprint: Option<String>,
}

impl LoadedSource {
    /// Company block from the fixed cells, empty when there is no grid.
    pub fn metadata(&self) -> SheetMetadata {
        self.grid
            .as_ref()
            .map(read_sheet_metadata)
            .unwrap_or_default()
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv(origin: String, bytes: &[u8], options: &IngestOptions) -> Result<LoadedSource> {
    options.validate()?;
    let fingerprint = content_fingerprint(bytes);
    let grid = read_csv_grid(bytes, &origin)?;
    let table = table_from_grid(&grid, options, &origin)?;
    Ok(LoadedSource {
        origin,
        table,
        grid: Some(grid),
        fingerprint: Some(fingerprint),
    })
}

/// Load a census source into a [`RawTable`].
///
/// Row selection applies to CSV sources only; tables and DataFrames already
/// carry their headers.
pub fn load_source(source: CensusSource, options: &IngestOptions) -> Result<LoadedSource> {
    let origin = source.origin();
    let loaded = match source {
        CensusSource::Path(path) => {
            let bytes = read_file(&path)?;
            load_csv(origin, &bytes, options)?
        }
        CensusSource::Bytes { bytes, .. } => load_csv(origin, &bytes, options)?,
        CensusSource::RawTable(table) => {
            debug!(origin = %origin, "using pre-loaded raw table");
            LoadedSource {
                origin,
                table,
                grid: None,
                fingerprint: None,
            }
        }
        CensusSource::DataFrame(df) => LoadedSource {
            table: raw_table_from_frame(&df)?,
            origin,
            grid: None,
            fingerprint: None,
        },
    };
    info!(
        origin = %loaded.origin,
        rows = loaded.table.height(),
        columns = loaded.table.width(),
        fingerprint = loaded.fingerprint.as_deref().unwrap_or(""),
        "census source loaded"
    );
    Ok(loaded)
}
