//! Interquartile Fence

use serde::{Deserialize, Serialize};

/// Tukey fence `[Q1 - k*IQR, Q3 + k*IQR]` for one group of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fence {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fence {
    /// Standard fence multiplier
    pub const DEFAULT_MULTIPLIER: f64 = 1.5;

    /// Compute the fence for a group, or `None` if the group is empty.
    ///
    /// Quartiles interpolate linearly, so groups of one to three values are
    /// handled without special cases.
    pub fn from_values(values: &[f64], multiplier: f64) -> Option<Self> {
        let sorted = statistics::sorted(values);
        let q1 = statistics::quantile_sorted(&sorted, 0.25)?;
        let q3 = statistics::quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;

        Some(Self {
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whether a value lies inside the fence (bounds inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}
