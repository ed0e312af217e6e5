//! Vehicle Listing Report - Main Entry Point
//!
//! Usage: `vehicle-report [config.toml]`

use anyhow::Context;
use report::{generate_report, init_logging, write_report, ReportConfig};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ReportConfig::load(config_path.as_deref()).context("loading configuration")?;

    init_logging(&config.log_level, config.json_logs)?;

    info!("=== Vehicle Listing Report v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Reading listings from {}", config.input_path.display());

    let report = generate_report(&config)
        .with_context(|| format!("building report from {}", config.input_path.display()))?;

    write_report(&report, config.output_path.as_deref()).context("writing report")?;

    Ok(())
}
