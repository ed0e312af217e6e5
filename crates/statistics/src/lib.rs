//! Listing Statistics
//!
//! Quantiles, descriptive summaries and histogram binning over numeric
//! listing columns.

mod histogram;
mod quantile;
mod summary;

pub use histogram::{Histogram, HistogramBin};
pub use quantile::{median, quantile, quantile_sorted, sorted};
pub use summary::{BoxStats, Summary};

use thiserror::Error;

/// Statistics errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Histogram needs at least one bin, got {0}")]
    InvalidBinCount(usize),
    #[error("Non-finite value {0} in input")]
    NonFinite(f64),
}
