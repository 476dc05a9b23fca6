/// Numeric element type accepted by the selection and reduction routines.
///
/// Values only need to be ordered and convertible to `f64`. All arithmetic
/// (averaging the two middle elements, absolute deviations, sums of
/// squares) is carried out after widening to `f64`, so integer inputs do
/// not overflow.
///
/// Implemented for all primitive integer types and for `f32`/`f64`.
///
/// # Examples
///
/// ```
/// use quickstat_stats::value::Value;
///
/// assert_eq!(3_u8.to_f64(), 3.0);
/// assert_eq!((-2_i64).to_f64(), -2.0);
/// assert_eq!(0.5_f32.to_f64(), 0.5);
/// ```
pub trait Value: Copy + PartialOrd {
    /// Widens the value to `f64`.
    ///
    /// 64-bit and pointer-sized integers beyond 2^53 lose precision.
    fn to_f64(self) -> f64;
}

macro_rules! impl_value_lossless {
    ($($ty:ty),*) => {
        $(
            impl Value for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_value_lossy {
    ($($ty:ty),*) => {
        $(
            impl Value for $ty {
                #[expect(clippy::cast_precision_loss)]
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_value_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_value_lossy!(i64, i128, isize, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossless_conversions() {
        assert_eq!(i8::MIN.to_f64(), -128.0);
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
        assert_eq!(1.25_f32.to_f64(), 1.25);
    }

    #[test]
    fn test_wide_integers_round_to_nearest() {
        assert_eq!(usize::MIN.to_f64(), 0.0);
        assert_eq!((1_i64 << 53).to_f64(), 9_007_199_254_740_992.0);
    }
}
