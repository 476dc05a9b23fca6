//! Randomized in-place selection of order statistics (quickselect).
//!
//! The routines in this module find the `i`-th smallest element of a slice
//! without sorting it. Each step partitions the active window around a
//! uniformly chosen pivot and continues in whichever side contains the
//! requested rank, giving expected linear time.
//!
//! All functions take the slice by `&mut` and reorder its elements as a
//! side effect. Copy the input first if the original order matters.

use std::{cmp::Ordering, fmt, mem, ops::Range, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::StatsError, robust, summary::RobustSummary, value::Value};

/// Partitions `values` around the element at index `pivot`.
///
/// Afterwards the slice consists of three contiguous zones: elements strictly
/// less than the pivot (in any order), the pivot itself, and elements greater
/// than or equal to the pivot (in any order). Elements equal to the pivot
/// always land in the last zone.
///
/// Returns the final index of the pivot, which is its rank within the slice
/// (the number of elements strictly less than it).
///
/// # Panics
///
/// Panics if `pivot >= values.len()`.
///
/// # Examples
///
/// ```
/// use quickstat_stats::select::partition;
///
/// let mut values = [6, 1, 2, 5, 9];
/// let rank = partition(&mut values, 3); // pivot value 5
/// assert_eq!(rank, 2);
/// assert_eq!(values[rank], 5);
/// assert!(values[..rank].iter().all(|&v| v < 5));
/// assert!(values[rank + 1..].iter().all(|&v| v >= 5));
/// ```
pub fn partition<T>(values: &mut [T], pivot: usize) -> usize
where
    T: PartialOrd,
{
    assert!(
        pivot < values.len(),
        "pivot index {pivot} out of bounds for slice of length {}",
        values.len()
    );

    // Park the pivot at the front; it stays there for the whole scan.
    values.swap(0, pivot);

    // [1, boundary) holds elements less than the pivot.
    let mut boundary = 1;
    for j in 1..values.len() {
        if values[j] < values[0] {
            values.swap(j, boundary);
            boundary += 1;
        }
    }

    values.swap(0, boundary - 1);
    boundary - 1
}

/// Like [`partition`], but restricted to the sub-range `range` of `values`.
///
/// `pivot` and the returned rank are both local to `range`. Elements outside
/// the range are not touched.
///
/// # Panics
///
/// Panics if `range` is out of bounds or `pivot >= range.len()`.
///
/// # Examples
///
/// ```
/// use quickstat_stats::select::partition_range;
///
/// let mut values = [100, 3, 1, 2, -100];
/// let rank = partition_range(&mut values, 0, 1..4);
/// assert_eq!(rank, 2);
/// assert_eq!(values, [100, 2, 1, 3, -100]);
/// ```
pub fn partition_range<T>(values: &mut [T], pivot: usize, range: Range<usize>) -> usize
where
    T: PartialOrd,
{
    partition(&mut values[range], pivot)
}

/// Returns the element of rank `rank` (0-based) in `values`.
///
/// The result is the element that would occupy index `rank` if `values` were
/// sorted in ascending order. When several elements tie for that rank, one of
/// them is returned; which one is unspecified, but its value is not.
///
/// Pivots are drawn from `rng`. The slice is reordered as a side effect.
///
/// Returns `None` if `rank >= values.len()`.
///
/// # Examples
///
/// ```
/// use quickstat_stats::select::select;
///
/// let mut rng = rand::rng();
/// let mut values = [7, 1, 3, 4, 6, 2, 5];
/// assert_eq!(select(&mut values, 0, &mut rng), Some(1));
/// assert_eq!(select(&mut values, 3, &mut rng), Some(4));
/// assert_eq!(select(&mut values, 7, &mut rng), None);
/// ```
pub fn select<T, R>(values: &mut [T], rank: usize, rng: &mut R) -> Option<T>
where
    T: Copy + PartialOrd,
    R: Rng + ?Sized,
{
    if rank >= values.len() {
        return None;
    }

    let mut window = values;
    let mut rank = rank;
    loop {
        if window.len() == 1 {
            return Some(window[0]);
        }

        let pivot = rng.random_range(0..window.len());
        let pivot_rank = partition(window, pivot);

        let taken = mem::take(&mut window);
        match pivot_rank.cmp(&rank) {
            Ordering::Equal => return Some(taken[pivot_rank]),
            Ordering::Greater => window = &mut taken[..pivot_rank],
            Ordering::Less => {
                window = &mut taken[pivot_rank + 1..];
                rank -= pivot_rank + 1;
            }
        }
    }
}

/// Like [`select`], but restricted to the sub-range `range` of `values`.
///
/// `rank` is local to `range`. Elements outside the range are not touched.
///
/// Returns `None` if `range` is out of bounds or `rank >= range.len()`.
///
/// # Examples
///
/// ```
/// use quickstat_stats::select::select_range;
///
/// let mut rng = rand::rng();
/// let mut values = [0, 9, 8, 7, 0];
/// assert_eq!(select_range(&mut values, 1..4, 0, &mut rng), Some(7));
/// assert_eq!(values[0], 0);
/// assert_eq!(values[4], 0);
/// assert_eq!(select_range(&mut values, 1..9, 0, &mut rng), None);
/// ```
pub fn select_range<T, R>(
    values: &mut [T],
    range: Range<usize>,
    rank: usize,
    rng: &mut R,
) -> Option<T>
where
    T: Copy + PartialOrd,
    R: Rng + ?Sized,
{
    select(values.get_mut(range)?, rank, rng)
}

/// Seed for deterministic pivot selection.
///
/// A 128-bit (16-byte) seed for the generator owned by a [`Selector`]. Two
/// selectors built from the same seed choose the same pivots, so results
/// and the resulting permutation of the input are reproducible.
///
/// Serialized as, and parsed from, a 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use quickstat_stats::select::SelectionSeed;
/// use rand::Rng as _;
///
/// let seed: SelectionSeed = rand::rng().random();
/// let parsed: SelectionSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSeed([u8; 16]);

impl SelectionSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

/// Error returned when parsing a [`SelectionSeed`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid seed: {input:?} is not a hex string")]
    InvalidDigit { input: String },
}

impl fmt::Display for SelectionSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for SelectionSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        // `from_str_radix` accepts a leading sign; a seed must be digits only.
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidDigit {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SelectionSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SelectionSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SelectionSeed` values with `rng.random()`.
impl Distribution<SelectionSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SelectionSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SelectionSeed(seed)
    }
}

/// Order-statistic calculator that owns its pivot generator.
///
/// A convenience wrapper around the free functions of this module and of
/// [`robust`](crate::robust) for callers that do not want to thread a random
/// number generator through every call. Use [`Selector::with_seed`] for
/// reproducible runs.
///
/// # Example
///
/// ```
/// use quickstat_stats::select::Selector;
///
/// let mut selector = Selector::new();
///
/// let mut values = [6, 1, 2, 5, 9];
/// assert_eq!(selector.median(&mut values).unwrap(), 5.0);
/// assert_eq!(selector.mad(&mut values).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Selector {
    seed: SelectionSeed,
    rng: Pcg32,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// Creates a selector seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic pivots.
    #[must_use]
    pub fn with_seed(seed: SelectionSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Returns the seed this selector was created with.
    #[must_use]
    pub fn seed(&self) -> SelectionSeed {
        self.seed
    }

    /// See [`select`].
    pub fn select<T>(&mut self, values: &mut [T], rank: usize) -> Option<T>
    where
        T: Copy + PartialOrd,
    {
        select(values, rank, &mut self.rng)
    }

    /// See [`select_range`].
    pub fn select_range<T>(
        &mut self,
        values: &mut [T],
        range: Range<usize>,
        rank: usize,
    ) -> Option<T>
    where
        T: Copy + PartialOrd,
    {
        select_range(values, range, rank, &mut self.rng)
    }

    /// See [`robust::median`].
    pub fn median<T>(&mut self, values: &mut [T]) -> Result<f64, StatsError>
    where
        T: Value,
    {
        robust::median(values, &mut self.rng)
    }

    /// See [`robust::mad`].
    pub fn mad<T>(&mut self, values: &mut [T]) -> Result<f64, StatsError>
    where
        T: Value,
    {
        robust::mad(values, &mut self.rng)
    }

    /// See [`RobustSummary::new`].
    pub fn summarize<T>(&mut self, values: &[T]) -> Result<RobustSummary, StatsError>
    where
        T: Value,
    {
        RobustSummary::new(values, &mut self.rng)
    }
}
