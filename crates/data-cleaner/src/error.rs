//! Data Integrity Error Types

use dataset::Column;
use thiserror::Error;

/// Fatal problems with the raw listing data. Any of these aborts cleaning.
///
/// `row` is the 1-based data row in the source file, header excluded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataIntegrityError {
    /// Required column absent from the header
    #[error("Required column missing: {0}")]
    MissingColumn(Column),

    /// Value present but not usable for its column
    #[error("Row {row}: invalid {column} value {value:?}")]
    InvalidValue {
        column: Column,
        row: usize,
        value: String,
    },

    /// Value absent where no repair rule applies
    #[error("Row {row}: missing required {column} value")]
    MissingValue { column: Column, row: usize },

    /// Posting date in none of the accepted formats
    #[error("Row {row}: unparseable date {value:?}")]
    UnparseableDate { row: usize, value: String },

    /// Odometer values need imputing but none are known
    #[error("No odometer values available to impute {missing} missing entries")]
    NoOdometerValues { missing: usize },
}
