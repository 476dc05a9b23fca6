//! Single-pass moment-based reductions: mean, sample variance and Pearson
//! correlation.
//!
//! Sums are accumulated in `f64` without compensation.

use crate::{error::StatsError, value::Value};

/// Computes the arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`StatsError::Empty`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use quickstat_stats::moments::mean;
///
/// assert_eq!(mean(&[1, 2, 3, 4]).unwrap(), 2.5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean<T>(values: &[T]) -> Result<f64, StatsError>
where
    T: Value,
{
    if values.is_empty() {
        return Err(StatsError::Empty);
    }
    let sum = values.iter().map(|v| v.to_f64()).sum::<f64>();
    Ok(sum / values.len() as f64)
}

/// Computes the sample variance of `values` around a precomputed `mean`.
///
/// Uses Bessel's correction (divides by `n - 1`).
///
/// # Errors
///
/// Returns [`StatsError::TooFewValues`] if `values` has fewer than two
/// elements.
///
/// # Examples
///
/// ```
/// use quickstat_stats::moments::{mean, variance};
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// let m = mean(&values).unwrap();
/// assert!((variance(&values, m).unwrap() - 5.0 / 3.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance<T>(values: &[T], mean: f64) -> Result<f64, StatsError>
where
    T: Value,
{
    let n = values.len();
    if n < 2 {
        return Err(StatsError::TooFewValues {
            required: 2,
            actual: n,
        });
    }
    let sum_sq = values
        .iter()
        .map(|v| (v.to_f64() - mean).powi(2))
        .sum::<f64>();
    Ok(sum_sq / (n - 1) as f64)
}

/// Computes the sample standard deviation, the square root of [`variance`].
///
/// # Errors
///
/// Same as [`variance`].
pub fn std_dev<T>(values: &[T], mean: f64) -> Result<f64, StatsError>
where
    T: Value,
{
    variance(values, mean).map(f64::sqrt)
}

/// Computes the Pearson correlation coefficient of two equally long samples.
///
/// ```text
/// r = (Σ x_i y_i - n m_x m_y) / ((n - 1) s_x s_y)
/// ```
///
/// where `m` are the sample means and `s` the sample standard deviations.
/// The result nominally lies in `[-1, 1]`; rounding may push it slightly
/// outside.
///
/// # Errors
///
/// - [`StatsError::LengthMismatch`] if `xs` and `ys` differ in length.
/// - [`StatsError::TooFewValues`] if there are fewer than two pairs.
/// - [`StatsError::ZeroVariance`] if either sample is constant.
///
/// # Examples
///
/// ```
/// use quickstat_stats::moments::correlation;
///
/// let r = correlation(&[1, 2, 3, 4], &[4, 3, 2, 1]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn correlation<T>(xs: &[T], ys: &[T]) -> Result<f64, StatsError>
where
    T: Value,
{
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }

    if xs.len() < 2 {
        return Err(StatsError::TooFewValues {
            required: 2,
            actual: xs.len(),
        });
    }

    let mean_x = mean(xs)?;
    let sd_x = std_dev(xs, mean_x)?;
    let mean_y = mean(ys)?;
    let sd_y = std_dev(ys, mean_y)?;
    if sd_x == 0.0 || sd_y == 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let dot = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| x.to_f64() * y.to_f64())
        .sum::<f64>();
    let n = xs.len() as f64;
    Ok((dot - n * mean_x * mean_y) / ((n - 1.0) * sd_x * sd_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(mean(&[5, 6, 7, 8]), Ok(6.5));
        assert_eq!(mean(&[-7_i8]), Ok(-7.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean::<f64>(&[]), Err(StatsError::Empty));
    }

    #[test]
    fn test_variance_matches_manual() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let m = mean(&values).unwrap();
        let manual = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / 3.0;
        assert_eq!(variance(&values, m), Ok(manual));
    }

    #[test]
    fn test_variance_too_few_values() {
        assert_eq!(
            variance(&[1.0], 1.0),
            Err(StatsError::TooFewValues {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(
            variance::<i32>(&[], 0.0),
            Err(StatsError::TooFewValues {
                required: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_std_dev() {
        let values = [2, 4, 4, 4, 5, 5, 7, 9];
        let m = mean(&values).unwrap();
        assert_eq!(m, 5.0);
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((std_dev(&values, m).unwrap() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_correlation_perfect_positive() {
        let r = correlation(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]).unwrap();
        assert!((r - 1.0).abs() < TOLERANCE, "r = {r}");
    }

    #[test]
    fn test_correlation_perfect_negative() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let zs = xs.iter().rev().copied().collect::<Vec<_>>();
        let r = correlation(&xs, &zs).unwrap();
        assert!((r + 1.0).abs() < TOLERANCE, "r = {r}");
    }

    #[test]
    fn test_correlation_uncorrelated() {
        let r = correlation(&[1, 2, 3, 4], &[1, -1, -1, 1]).unwrap();
        assert!(r.abs() < TOLERANCE, "r = {r}");
    }

    #[test]
    fn test_correlation_symmetric() {
        let xs = [0.5, 2.5, 1.0, 7.25, 3.0];
        let ys = [1.0, 0.0, 4.5, 2.0, 2.0];
        let a = correlation(&xs, &ys).unwrap();
        let b = correlation(&ys, &xs).unwrap();
        assert!((a - b).abs() < TOLERANCE);
        assert!((-1.0..=1.0).contains(&a));
    }

    #[test]
    fn test_correlation_length_mismatch() {
        assert_eq!(
            correlation(&[1, 2, 3], &[1, 2]),
            Err(StatsError::LengthMismatch { x: 3, y: 2 })
        );
    }

    #[test]
    fn test_correlation_too_few_values() {
        assert_eq!(
            correlation(&[1], &[2]),
            Err(StatsError::TooFewValues {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(
            correlation::<f64>(&[], &[]),
            Err(StatsError::TooFewValues {
                required: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_correlation_zero_variance() {
        assert_eq!(
            correlation(&[3, 3, 3], &[1, 2, 3]),
            Err(StatsError::ZeroVariance)
        );
        assert_eq!(
            correlation(&[1, 2, 3], &[0, 0, 0]),
            Err(StatsError::ZeroVariance)
        );
    }
}
