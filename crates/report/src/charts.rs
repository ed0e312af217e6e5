//! Chart Data
//!
//! Numbers behind each report chart. Styling and layout are left to the
//! renderer.

use dataset::VehicleListing;
use outlier_filter::DecadeListing;
use serde::{Deserialize, Serialize};
use statistics::{BoxStats, Histogram, StatsError, Summary};
use std::collections::BTreeMap;

/// One point of the price vs model year scatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub model_year: i64,
    pub price: i64,
}

/// Rectangle highlighted on the scatter plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightBand {
    pub year_start: i64,
    pub year_end: i64,
    pub price_low: i64,
    pub price_high: i64,
}

/// Price vs model year scatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceScatter {
    pub points: Vec<ScatterPoint>,
    /// Sparse early years, spanning zero to the top price
    pub sparse_band: HighlightBand,
    /// Highest-priced listing, annotated on the chart
    pub peak: Option<ScatterPoint>,
}

/// Box for one decade of the filtered decade view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeBox {
    pub model_decade: i64,
    pub stats: BoxStats,
}

/// Price distribution by decade, outliers removed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecadeBoxPlot {
    pub boxes: Vec<DecadeBox>,
}

fn prices(listings: &[VehicleListing]) -> Vec<f64> {
    listings.iter().map(|l| l.price as f64).collect()
}

/// Price summary rounded to cents
pub fn price_summary(listings: &[VehicleListing]) -> Option<Summary> {
    Summary::compute(&prices(listings)).map(|s| s.rounded(2))
}

/// Price histogram with `bins` equal-width bins
pub fn price_histogram(listings: &[VehicleListing], bins: usize) -> Result<Histogram, StatsError> {
    Histogram::compute(&prices(listings), bins)
}

/// Price vs year scatter with the sparse-year band and top-price annotation
pub fn price_scatter(listings: &[VehicleListing], year_start: i64, year_end: i64) -> PriceScatter {
    let points: Vec<ScatterPoint> = listings
        .iter()
        .map(|l| ScatterPoint {
            model_year: l.model_year,
            price: l.price,
        })
        .collect();

    // First listing wins ties for the top price
    let peak = points
        .iter()
        .copied()
        .reduce(|best, p| if p.price > best.price { p } else { best });

    PriceScatter {
        sparse_band: HighlightBand {
            year_start,
            year_end,
            price_low: 0,
            price_high: peak.map_or(0, |p| p.price),
        },
        points,
        peak,
    }
}

/// One box per decade present in the filtered rows, oldest first
pub fn decade_box_plot(filtered: &[DecadeListing]) -> DecadeBoxPlot {
    let mut by_decade: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for row in filtered {
        by_decade
            .entry(row.model_decade)
            .or_default()
            .push(row.listing.price as f64);
    }

    let boxes = by_decade
        .into_iter()
        .filter_map(|(model_decade, values)| {
            BoxStats::compute(&values).map(|stats| DecadeBox {
                model_decade,
                stats,
            })
        })
        .collect();

    DecadeBoxPlot { boxes }
}
