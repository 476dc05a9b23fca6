//! Robust location and scale estimates built on [`select`](crate::select).
//!
//! Both functions reorder their input. [`mad`] allocates one temporary
//! buffer of `f64` deviations the same length as the input.

use rand::Rng;

use crate::{error::StatsError, select::select, value::Value};

/// Computes the median of `values`.
///
/// For an odd number of values this is the middle order statistic. For an
/// even number it is the mean of the two middle order statistics, each found
/// by a separate selection pass.
///
/// The slice is reordered as a side effect.
///
/// # Errors
///
/// Returns [`StatsError::Empty`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use quickstat_stats::robust::median;
///
/// let mut rng = rand::rng();
/// assert_eq!(median(&mut [6, 1, 2, 5, 9], &mut rng).unwrap(), 5.0);
/// assert_eq!(median(&mut [2, 1, 8, 6], &mut rng).unwrap(), 4.0);
/// ```
pub fn median<T, R>(values: &mut [T], rng: &mut R) -> Result<f64, StatsError>
where
    T: Value,
    R: Rng + ?Sized,
{
    let n = values.len();
    if n == 0 {
        return Err(StatsError::Empty);
    }
    if n % 2 == 1 {
        let middle = select(values, n / 2, rng).ok_or(StatsError::Empty)?;
        return Ok(middle.to_f64());
    }
    let lower = select(values, n / 2 - 1, rng).ok_or(StatsError::Empty)?;
    let upper = select(values, n / 2, rng).ok_or(StatsError::Empty)?;
    Ok(f64::midpoint(lower.to_f64(), upper.to_f64()))
}

/// Computes the median absolute deviation of `values`.
///
/// ```text
/// MAD = median(|x_i - median(x)|)
/// ```
///
/// The unscaled MAD is returned; multiply by `1.4826` for a consistent
/// estimator of the standard deviation under normality.
///
/// `values` is reordered by the inner median computation; the deviations
/// are computed into a separate buffer.
///
/// # Errors
///
/// Returns [`StatsError::Empty`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use quickstat_stats::robust::mad;
///
/// let mut rng = rand::rng();
/// assert_eq!(mad(&mut [6, 1, 2, 5, 9], &mut rng).unwrap(), 3.0);
/// assert_eq!(mad(&mut [2, 1, 8, 6], &mut rng).unwrap(), 2.5);
/// ```
pub fn mad<T, R>(values: &mut [T], rng: &mut R) -> Result<f64, StatsError>
where
    T: Value,
    R: Rng + ?Sized,
{
    let center = median(values, rng)?;
    let mut deviations = values
        .iter()
        .map(|v| (v.to_f64() - center).abs())
        .collect::<Vec<_>>();
    median(&mut deviations, rng)
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn sorted_median(values: &[i32]) -> f64 {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let n = sorted.len();
        if n % 2 == 1 {
            f64::from(sorted[n / 2])
        } else {
            f64::midpoint(f64::from(sorted[n / 2 - 1]), f64::from(sorted[n / 2]))
        }
    }

    proptest! {
        #[test]
        fn prop_median_order_independent(
            values in proptest::collection::vec(-10_000_i32..10_000, 1..300),
            seed in any::<u64>(),
        ) {
            let expected = sorted_median(&values);
            let mut work = values;
            let mut rng = Pcg32::seed_from_u64(seed);
            prop_assert_eq!(median(&mut work, &mut rng), Ok(expected));
        }

        #[test]
        fn prop_mad_consistent_with_fresh_copy(
            values in proptest::collection::vec(-1_000_i32..1_000, 1..200),
            seed in any::<u64>(),
        ) {
            let center = sorted_median(&values);
            let mut deviations = values
                .iter()
                .map(|&v| (f64::from(v) - center).abs())
                .collect::<Vec<_>>();
            deviations.sort_by(f64::total_cmp);
            let n = deviations.len();
            let expected = if n % 2 == 1 {
                deviations[n / 2]
            } else {
                f64::midpoint(deviations[n / 2 - 1], deviations[n / 2])
            };

            let mut work = values;
            let mut rng = Pcg32::seed_from_u64(seed);
            prop_assert_eq!(mad(&mut work, &mut rng), Ok(expected));
        }
    }
}
