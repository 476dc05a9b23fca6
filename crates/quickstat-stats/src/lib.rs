//! Robust descriptive statistics built on randomized selection.
//!
//! This crate computes order statistics without fully sorting the data,
//! using an in-place randomized quickselect with expected linear time, and
//! layers the usual summary measures on top:
//!
//! - **Selection**: partition a slice around a pivot and find the `i`-th
//!   smallest element
//! - **Robust estimates**: median and median absolute deviation (MAD)
//! - **Moments**: mean, sample variance, standard deviation and Pearson
//!   correlation
//! - **Summaries**: all of the above in one record
//!
//! # Modules
//!
//! - [`select`]: Partitioning, quickselect and the seeded [`Selector`]
//! - [`robust`]: Median and MAD
//! - [`moments`]: Mean, variance and correlation
//! - [`summary`]: Combined robust/classical summary of a dataset
//! - [`value`]: The [`Value`] bound for element types
//! - [`error`]: The [`StatsError`] type
//!
//! Selection reorders its input. Functions that take `&mut [T]` leave the
//! slice permuted; copy it first if the order matters.
//!
//! # Examples
//!
//! ## Median and MAD
//!
//! ```
//! use quickstat_stats::{robust, select::Selector};
//!
//! let mut rng = rand::rng();
//! let mut values = [6, 1, 2, 5, 9];
//! assert_eq!(robust::median(&mut values, &mut rng).unwrap(), 5.0);
//! assert_eq!(robust::mad(&mut values, &mut rng).unwrap(), 3.0);
//!
//! // Or let a selector own the generator.
//! let mut selector = Selector::new();
//! let mut values = [2, 1, 8, 6];
//! assert_eq!(selector.median(&mut values).unwrap(), 4.0);
//! assert_eq!(selector.mad(&mut values).unwrap(), 2.5);
//! ```
//!
//! ## Order statistics
//!
//! ```
//! use quickstat_stats::select::select;
//!
//! let mut values = [13, -4, 8, 0, 21];
//! assert_eq!(select(&mut values, 1, &mut rand::rng()), Some(0));
//! ```
//!
//! ## Correlation
//!
//! ```
//! use quickstat_stats::{StatsError, moments::correlation};
//!
//! let r = correlation(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//!
//! assert_eq!(
//!     correlation(&[1.0, 2.0], &[1.0]),
//!     Err(StatsError::LengthMismatch { x: 2, y: 1 })
//! );
//! ```
//!
//! ## Reproducible runs
//!
//! ```
//! use quickstat_stats::select::{SelectionSeed, Selector};
//!
//! let seed: SelectionSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//! let mut a = [5, 3, 9, 1, 7, 2];
//! let mut b = a;
//! Selector::with_seed(seed).median(&mut a).unwrap();
//! Selector::with_seed(seed).median(&mut b).unwrap();
//! assert_eq!(a, b);
//! ```

pub use self::{error::StatsError, select::Selector, value::Value};

pub mod error;
pub mod moments;
pub mod robust;
pub mod select;
pub mod summary;
pub mod value;
