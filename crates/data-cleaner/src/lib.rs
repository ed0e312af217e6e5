//! Listing Cleaning
//!
//! Repairs missing values, coerces types, and normalizes model names so every
//! chart reads the same analysis-ready listings.

mod cleaner;
mod config;
mod error;
mod normalizer;

pub use cleaner::{CleanedDataset, Cleaner, CleaningStats};
pub use config::CleaningConfig;
pub use error::DataIntegrityError;
pub use normalizer::ModelRules;
