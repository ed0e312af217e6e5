//! Equal-Width Histogram

use crate::StatsError;
use serde::{Deserialize, Serialize};

/// One histogram bin covering `[lower, upper)`; the last bin also includes `upper`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Histogram of a numeric column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin values into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// When every value is equal the range is widened by 0.5 on each side so
    /// the bins keep a non-zero width. Empty input yields an empty histogram.
    pub fn compute(values: &[f64], bins: usize) -> Result<Self, StatsError> {
        if bins == 0 {
            return Err(StatsError::InvalidBinCount(bins));
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(bad));
        }
        if values.is_empty() {
            return Ok(Self::default());
        }

        let mut min = values.iter().cloned().fold(f64::MAX, f64::min);
        let mut max = values.iter().cloned().fold(f64::MIN, f64::max);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }
        let width = (max - min) / bins as f64;

        let mut out: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: min + width * i as f64,
                upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for &v in values {
            let idx = (((v - min) / width).floor() as usize).min(bins - 1);
            out[idx].count += 1;
        }

        Ok(Self { bins: out })
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_binning() {
        let hist = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(hist.bins.len(), 2);
        assert_eq!(hist.bins[0].count, 2); // 0, 1
        assert_eq!(hist.bins[1].count, 3); // 2, 3, 4 (max is inclusive)
        assert_eq!(hist.bins[1].upper, 4.0);
    }

    #[test]
    fn test_constant_values() {
        let hist = Histogram::compute(&[5.0, 5.0, 5.0], 3).unwrap();
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.bins[0].lower, 4.5);
        assert_eq!(hist.bins[2].upper, 5.5);
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert_eq!(
            Histogram::compute(&[1.0], 0),
            Err(StatsError::InvalidBinCount(0))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Histogram::compute(&[1.0, f64::NAN], 4),
            Err(StatsError::NonFinite(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let hist = Histogram::compute(&[], 45).unwrap();
        assert!(hist.bins.is_empty());
    }

    proptest! {
        #[test]
        fn prop_every_value_is_binned(
            values in prop::collection::vec(0.0f64..400_000.0, 1..200),
            bins in 1usize..60,
        ) {
            let hist = Histogram::compute(&values, bins).unwrap();
            prop_assert_eq!(hist.bins.len(), bins);
            prop_assert_eq!(hist.total(), values.len());
        }
    }
}
