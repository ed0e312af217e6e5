//! Cleaning configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Repair and normalization rules applied by the cleaner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Category written into missing paint colors
    pub paint_color_sentinel: String,

    /// Models dropped from the dataset (case-insensitive)
    pub excluded_models: Vec<String>,

    /// Model shorthand to canonical name (case-insensitive on the key)
    pub model_aliases: BTreeMap<String, String>,

    /// `chrono` formats tried in order when parsing `date_posted`
    pub date_formats: Vec<String>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        let model_aliases = [
            ("ford f150", "ford f-150"),
            ("ford f250", "ford f-250"),
            ("ford f350", "ford f-350"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            paint_color_sentinel: "unknown".to_string(),
            excluded_models: vec!["chevrolet silverado".to_string()],
            model_aliases,
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%m/%d/%Y".to_string(),
            ],
        }
    }
}
