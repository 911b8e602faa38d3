//! Descriptive statistics over a sample of floating-point values.
//!
//! The engine works on a [`Sample`], which cannot be empty, so every
//! aggregate is total once a sample exists. [`describe`] computes the full
//! set of figures reported by `compute-statistics`.
//!
//! # Example
//!
//! ```rust
//! use linestats::stats::describe;
//!
//! let summary = describe(vec![4.0, 8.0, 6.0, 5.0, 3.0, 2.0, 8.0, 9.0, 2.0, 5.0]).unwrap();
//! assert!((summary.mean - 5.2).abs() < 1e-12);
//! assert_eq!(summary.median, 5.0);
//! assert_eq!(summary.mode, Some(8.0));
//! ```

pub mod central;
pub mod dispersion;
pub mod newton;

pub use central::{mean, median, mode};
pub use dispersion::{variance_and_sd, Dispersion};
pub use newton::{newton_sqrt, sqrt, SqrtResult, SQRT_MAX_ITERATIONS, SQRT_TOLERANCE};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("cannot compute statistics of an empty sample")]
    EmptySample,
}

/// A non-empty, immutable sequence of values in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

// A sample is never empty, so there is no `is_empty` to pair with `len`
#[allow(clippy::len_without_is_empty)]
impl Sample {
    pub fn new(values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Every figure reported for a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of values that entered the computation.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub dispersion: Dispersion,
}

/// Compute mean, median, mode and dispersion in one pass over the API.
pub fn describe(values: Vec<f64>) -> Result<Summary, StatsError> {
    let sample = Sample::new(values)?;
    let mean = mean(&sample);

    let summary = Summary {
        count: sample.len(),
        mean,
        median: median(&sample),
        mode: mode(&sample),
        dispersion: variance_and_sd(&sample, mean),
    };
    log::debug!("described {} values: {:?}", summary.count, summary);
    Ok(summary)
}
