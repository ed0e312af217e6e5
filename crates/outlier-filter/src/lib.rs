//! Outlier Filtering
//!
//! Per-group interquartile fences over listing columns, plus the decade view
//! the box-plot chart groups by.

mod decade;
mod fence;
mod filter;

pub use decade::{decade_view, model_decade, DecadeListing};
pub use fence::Fence;
pub use filter::{partition_by, OutlierFilter};

use dataset::Column;
use thiserror::Error;

/// Outlier filtering errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlierError {
    /// Column name unknown, or not carried by the row type
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Target column is not numeric
    #[error("Column {0} is not numeric")]
    NonNumericColumn(Column),

    /// A row held a non-numeric value in the target column
    #[error("Non-numeric value {value:?} in column {column}")]
    NonNumericValue { column: Column, value: String },
}
