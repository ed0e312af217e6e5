//! Quantile Computation
//!
//! Quantiles use linear interpolation between the two nearest order
//! statistics: for `n` sorted values the `q` quantile sits at position
//! `(n - 1) * q`. This matches the usual dataframe default and is defined for
//! any non-empty input, including groups with a single value.

use std::cmp::Ordering;

/// Sort a copy of the values in ascending order
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Quantile of already-sorted values. `q` is clamped to `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let q = q.clamp(0.0, 1.0);
    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Quantile of unsorted values
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted(values), q)
}

/// Median; an even count averages the two middle values
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}
