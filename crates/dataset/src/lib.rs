//! Vehicle Listing Dataset
//!
//! Loads the raw listing CSV into memory and defines the row types shared by
//! the cleaning, filtering and reporting crates.

mod loader;
mod record;

pub use loader::RawTable;
pub use record::{Cell, Column, ColumnAccess, VehicleListing};

use thiserror::Error;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset has no header row")]
    MissingHeader,
}
