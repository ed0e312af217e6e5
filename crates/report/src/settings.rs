//! Report settings

use crate::ReportError;
use data_cleaner::CleaningConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report configuration.
///
/// Sources, later ones overriding earlier: built-in defaults, an optional TOML
/// file, then `REPORT_` environment variables (`__` separates nested keys,
/// e.g. `REPORT_CLEANING__PAINT_COLOR_SENTINEL`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Listing CSV to load
    pub input_path: PathBuf,

    /// Where to write the report JSON; stdout when unset
    pub output_path: Option<PathBuf>,

    /// Include the cleaned and decade-filtered rows in the output
    pub include_rows: bool,

    /// Price histogram bin count
    pub histogram_bins: usize,

    /// Earliest decade kept in the decade box plot
    pub min_decade: i64,

    /// Model years highlighted as sparse on the scatter plot
    pub sparse_year_start: i64,
    pub sparse_year_end: i64,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines
    pub json_logs: bool,

    /// Cleaning rules
    pub cleaning: CleaningConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("vehicles_us.csv"),
            output_path: None,
            include_rows: true,
            histogram_bins: 45,
            min_decade: 1950,
            sparse_year_start: 1900,
            sparse_year_end: 1949,
            log_level: "info".to_string(),
            json_logs: false,
            cleaning: CleaningConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration, reading `path` as TOML when given
    pub fn load(path: Option<&Path>) -> Result<Self, ReportError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("REPORT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no report can be built from
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.histogram_bins == 0 {
            return Err(ReportError::InvalidConfig(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if self.sparse_year_start > self.sparse_year_end {
            return Err(ReportError::InvalidConfig(format!(
                "sparse year range {}..={} is empty",
                self.sparse_year_start, self.sparse_year_end
            )));
        }
        Ok(())
    }
}
