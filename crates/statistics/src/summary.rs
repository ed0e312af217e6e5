//! Descriptive Summaries

use crate::quantile::{quantile_sorted, sorted};
use serde::{Deserialize, Serialize};

/// Descriptive statistics for a numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Sample standard deviation (n - 1); undefined for a single value
    pub std_dev: Option<f64>,
    /// Minimum value
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    /// Maximum value
    pub max: f64,
}

impl Summary {
    /// Compute the summary, or `None` for an empty input
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sorted = sorted(values);
        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;

        let std_dev = if sorted.len() > 1 {
            let m2: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
            Some((m2 / (n - 1.0)).sqrt())
        } else {
            None
        };

        Some(Self {
            count: sorted.len(),
            mean,
            std_dev,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }

    /// Copy with every statistic rounded to `places` decimals
    pub fn rounded(&self, places: i32) -> Self {
        let round = |v: f64| {
            let factor = 10f64.powi(places);
            (v * factor).round() / factor
        };
        Self {
            count: self.count,
            mean: round(self.mean),
            std_dev: self.std_dev.map(round),
            min: round(self.min),
            q1: round(self.q1),
            median: round(self.median),
            q3: round(self.q3),
            max: round(self.max),
        }
    }
}

/// Five-number summary for one box of a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    /// Compute box statistics, or `None` for an empty input
    pub fn compute(values: &[f64]) -> Option<Self> {
        let summary = Summary::compute(values)?;
        Some(Self {
            count: summary.count,
            min: summary.min,
            q1: summary.q1,
            median: summary.median,
            q3: summary.q3,
            max: summary.max,
        })
    }
}
