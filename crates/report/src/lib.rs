//! Vehicle Listing Price Report
//!
//! Loads the listing CSV, cleans it, filters price outliers per model decade,
//! and assembles the data behind each report chart for the renderer.

pub mod charts;
mod settings;

pub use settings::ReportConfig;

use charts::{DecadeBoxPlot, PriceScatter};
use chrono::{DateTime, Utc};
use data_cleaner::{Cleaner, CleaningStats, DataIntegrityError};
use dataset::{Column, LoadError, RawTable, VehicleListing};
use outlier_filter::{decade_view, DecadeListing, OutlierError, OutlierFilter};
use serde::Serialize;
use statistics::{Histogram, StatsError, Summary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Report generation errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to load listings: {0}")]
    Load(#[from] LoadError),
    #[error("Data integrity error: {0}")]
    Integrity(#[from] DataIntegrityError),
    #[error("Outlier filter failed: {0}")]
    Outlier(#[from] OutlierError),
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Everything the renderer needs, built in one pass
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub cleaning: CleaningStats,
    pub price_summary: Option<Summary>,
    pub price_histogram: Histogram,
    pub price_scatter: PriceScatter,
    pub decade_box_plot: DecadeBoxPlot,
    /// Cleaned listings feeding the histogram and scatter
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listings: Vec<VehicleListing>,
    /// Decade view after outlier filtering, feeding the box plot
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decade_listings: Vec<DecadeListing>,
}

/// Build the report from an already-loaded raw table.
///
/// Cleaning failures abort before any chart data is produced.
pub fn build_report(table: &RawTable, config: &ReportConfig) -> Result<Report, ReportError> {
    config.validate()?;

    let cleaned = Cleaner::new(config.cleaning.clone()).clean(table)?;
    let listings = cleaned.listings;

    let price_summary = charts::price_summary(&listings);
    let price_histogram = charts::price_histogram(&listings, config.histogram_bins)?;
    let price_scatter =
        charts::price_scatter(&listings, config.sparse_year_start, config.sparse_year_end);

    let decades = decade_view(&listings, config.min_decade);
    let filtered = OutlierFilter::default().filter(
        &decades,
        Column::Price.name(),
        Column::ModelDecade.name(),
    )?;
    let decade_box_plot = charts::decade_box_plot(&filtered);

    info!(
        "Report built: {} listings, {} decades, {} rows after outlier filter",
        listings.len(),
        decade_box_plot.boxes.len(),
        filtered.len()
    );

    let (listings, decade_listings) = if config.include_rows {
        (listings, filtered)
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(Report {
        generated_at: Utc::now(),
        cleaning: cleaned.stats,
        price_summary,
        price_histogram,
        price_scatter,
        decade_box_plot,
        listings,
        decade_listings,
    })
}

/// Load the configured CSV and build the report
pub fn generate_report(config: &ReportConfig) -> Result<Report, ReportError> {
    let table = RawTable::load_csv(&config.input_path)?;
    build_report(&table, config)
}

/// Write the report as JSON to `path`, or stdout when `None`
pub fn write_report(report: &Report, path: Option<&Path>) -> Result<(), ReportError> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, report)?;
            writer.flush()?;
            info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Initialize logging
pub fn init_logging(level: &str, json: bool) -> Result<(), ReportError> {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| ReportError::Logging(e.to_string()))
}
