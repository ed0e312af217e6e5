//! Listing Rows and Column Access

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named columns of the listing dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Price,
    ModelYear,
    Model,
    Cylinders,
    Odometer,
    PaintColor,
    Is4wd,
    DatePosted,
    /// Derived during analysis, never present in the raw CSV
    ModelDecade,
}

impl Column {
    /// Columns the raw CSV must carry
    pub const RAW: [Column; 8] = [
        Column::Price,
        Column::ModelYear,
        Column::Model,
        Column::Cylinders,
        Column::Odometer,
        Column::PaintColor,
        Column::Is4wd,
        Column::DatePosted,
    ];

    /// Header name as it appears in the CSV
    pub fn name(&self) -> &'static str {
        match self {
            Column::Price => "price",
            Column::ModelYear => "model_year",
            Column::Model => "model",
            Column::Cylinders => "cylinders",
            Column::Odometer => "odometer",
            Column::PaintColor => "paint_color",
            Column::Is4wd => "is_4wd",
            Column::DatePosted => "date_posted",
            Column::ModelDecade => "model_decade",
        }
    }

    /// Whether the column holds integer values
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Column::Model | Column::PaintColor | Column::DatePosted)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::RAW
            .iter()
            .chain(std::iter::once(&Column::ModelDecade))
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

/// A single typed cell, borrowed from its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell<'a> {
    Int(i64),
    Text(&'a str),
    Date(NaiveDate),
}

impl Cell<'_> {
    /// Integer value, if this is a numeric cell
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Date(d) => write!(f, "{}", d),
        }
    }
}

/// Column-wise access to a row type.
///
/// Row types only answer for the columns they carry; `cell` returns `None`
/// for anything else.
pub trait ColumnAccess {
    /// Columns this row type carries
    fn columns() -> &'static [Column];

    /// Value of a column on this row
    fn cell(&self, column: Column) -> Option<Cell<'_>>;

    /// Whether this row type carries the column
    fn has_column(column: Column) -> bool {
        Self::columns().contains(&column)
    }
}

/// One cleaned vehicle listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleListing {
    pub price: i64,
    pub model_year: i64,
    pub model: String,
    pub cylinders: i64,
    pub odometer: i64,
    pub paint_color: String,
    /// 1 when the listing is four-wheel drive, otherwise 0
    pub is_4wd: i64,
    pub date_posted: NaiveDate,
}

impl ColumnAccess for VehicleListing {
    fn columns() -> &'static [Column] {
        &Column::RAW
    }

    fn cell(&self, column: Column) -> Option<Cell<'_>> {
        match column {
            Column::Price => Some(Cell::Int(self.price)),
            Column::ModelYear => Some(Cell::Int(self.model_year)),
            Column::Model => Some(Cell::Text(&self.model)),
            Column::Cylinders => Some(Cell::Int(self.cylinders)),
            Column::Odometer => Some(Cell::Int(self.odometer)),
            Column::PaintColor => Some(Cell::Text(&self.paint_color)),
            Column::Is4wd => Some(Cell::Int(self.is_4wd)),
            Column::DatePosted => Some(Cell::Date(self.date_posted)),
            Column::ModelDecade => None,
        }
    }
}
