//! Raw CSV Table

use crate::LoadError;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Raw listing table exactly as read from disk.
///
/// Cells are kept as text; typing and repair belong to the cleaner. An empty
/// cell is a missing value.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names from the header row
    pub headers: Vec<String>,
    /// Data rows, one string per header
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Load a table from a CSV file on disk
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading listings from {}", path.display());

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_reader(file)
    }

    /// Read a table from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(LoadError::MissingHeader);
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!("Read {} rows x {} columns", rows.len(), headers.len());
        Ok(Self { headers, rows })
    }

    /// Position of a named column, if the header carries it
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
