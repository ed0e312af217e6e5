//! Decade View

use dataset::{Cell, Column, ColumnAccess, VehicleListing};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DECADE_COLUMNS: [Column; 9] = [
    Column::Price,
    Column::ModelYear,
    Column::Model,
    Column::Cylinders,
    Column::Odometer,
    Column::PaintColor,
    Column::Is4wd,
    Column::DatePosted,
    Column::ModelDecade,
];

/// Listing with its derived model decade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeListing {
    #[serde(flatten)]
    pub listing: VehicleListing,
    pub model_decade: i64,
}

impl ColumnAccess for DecadeListing {
    fn columns() -> &'static [Column] {
        &DECADE_COLUMNS
    }

    fn cell(&self, column: Column) -> Option<Cell<'_>> {
        match column {
            Column::ModelDecade => Some(Cell::Int(self.model_decade)),
            other => self.listing.cell(other),
        }
    }
}

/// Decade of a model year, e.g. 1987 -> 1980
pub fn model_decade(model_year: i64) -> i64 {
    model_year.div_euclid(10) * 10
}

/// Working copy of the listings tagged with their decade, keeping only
/// decades from `min_decade` on. The source listings are not modified.
pub fn decade_view(listings: &[VehicleListing], min_decade: i64) -> Vec<DecadeListing> {
    let view: Vec<DecadeListing> = listings
        .iter()
        .map(|listing| DecadeListing {
            model_decade: model_decade(listing.model_year),
            listing: listing.clone(),
        })
        .filter(|d| d.model_decade >= min_decade)
        .collect();

    debug!(
        "Decade view kept {} of {} listings (decade >= {})",
        view.len(),
        listings.len(),
        min_decade
    );
    view
}
