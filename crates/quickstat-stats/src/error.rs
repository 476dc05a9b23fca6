/// Errors reported by the statistics routines.
///
/// Degenerate inputs (empty slices, too few values for a sample variance,
/// constant samples in a correlation) are rejected up front instead of
/// producing a non-finite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("input contains no values")]
    Empty,
    #[display("at least {required} values required, got {actual}")]
    TooFewValues { required: usize, actual: usize },
    #[display("x and y must be equal in length (x: {x}, y: {y})")]
    LengthMismatch { x: usize, y: usize },
    #[display("input has zero variance")]
    ZeroVariance,
}
