use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{error::StatsError, moments, robust, value::Value};

/// Robust and classical summary statistics of a dataset.
///
/// Combines the selection-based location/scale estimates (median, MAD) with
/// the moment-based ones (mean, variance, standard deviation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustSummary {
    /// The number of values in the dataset.
    pub len: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The median of the dataset.
    pub median: f64,
    /// The (unscaled) median absolute deviation of the dataset.
    pub mad: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The sample variance, or `None` for a single value.
    pub variance: Option<f64>,
    /// The sample standard deviation, or `None` for a single value.
    pub std_dev: Option<f64>,
}

impl RobustSummary {
    /// Computes summary statistics from unordered values.
    ///
    /// The values are copied into a scratch buffer before selection, so
    /// `values` itself is left untouched.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to summarize
    /// * `rng` - Random source for pivot selection
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Empty`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quickstat_stats::summary::RobustSummary;
    /// let values = [6, 1, 2, 5, 9];
    /// let summary = RobustSummary::new(&values, &mut rand::rng()).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 9.0);
    /// assert_eq!(summary.median, 5.0);
    /// assert_eq!(summary.mad, 3.0);
    /// assert_eq!(summary.mean, 4.6);
    /// assert_eq!(values, [6, 1, 2, 5, 9]);
    /// ```
    pub fn new<T, R>(values: &[T], rng: &mut R) -> Result<Self, StatsError>
    where
        T: Value,
        R: Rng + ?Sized,
    {
        let (&first, rest) = values.split_first().ok_or(StatsError::Empty)?;
        let (min, max) = rest.iter().fold((first, first), |(lo, hi), &v| {
            (if v < lo { v } else { lo }, if v > hi { v } else { hi })
        });

        let mean = moments::mean(values)?;
        // A single value has no sample variance.
        let variance = moments::variance(values, mean).ok();
        let std_dev = variance.map(f64::sqrt);

        let mut scratch = values.to_vec();
        let median = robust::median(&mut scratch, rng)?;
        let mad = robust::mad(&mut scratch, rng)?;

        Ok(Self {
            len: values.len(),
            min: min.to_f64(),
            max: max.to_f64(),
            median,
            mad,
            mean,
            variance,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_summary_odd() {
        let summary = RobustSummary::new(&[6, 1, 2, 5, 9], &mut test_rng()).unwrap();
        assert_eq!(summary.len, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.mad, 3.0);
        assert!((summary.mean - 4.6).abs() < 1e-12);
        assert!((summary.variance.unwrap() - 10.3).abs() < 1e-12);
        assert!((summary.std_dev.unwrap() - 10.3_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_even() {
        let summary = RobustSummary::new(&[2.0, 1.0, 8.0, 6.0], &mut test_rng()).unwrap();
        assert_eq!(summary.median, 4.0);
        assert_eq!(summary.mad, 2.5);
        assert_eq!(summary.mean, 4.25);
    }

    #[test]
    fn test_summary_single_value() {
        let summary = RobustSummary::new(&[42_u32], &mut test_rng()).unwrap();
        assert_eq!(summary.len, 1);
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.mad, 0.0);
        assert_eq!(summary.variance, None);
        assert_eq!(summary.std_dev, None);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(
            RobustSummary::new::<i32, _>(&[], &mut test_rng()),
            Err(StatsError::Empty)
        );
    }

    #[test]
    fn test_summary_leaves_input_untouched() {
        let values = vec![9, 3, 7, 1, 5, 8, 2];
        let before = values.clone();
        RobustSummary::new(&values, &mut test_rng()).unwrap();
        assert_eq!(values, before);
    }

    #[test]
    fn test_summary_serializes_missing_variance_as_null() {
        let summary = RobustSummary::new(&[1.5], &mut test_rng()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["median"], 1.5);
        assert!(json["variance"].is_null());
    }
}
