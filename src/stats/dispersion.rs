//! Variance and standard deviation.

use super::newton::sqrt;
use super::Sample;

/// Spread of a sample around its mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispersion {
    /// `S / (n - 1)`; undefined for a single value.
    pub sample_variance: Option<f64>,
    /// `S / n`
    pub population_variance: f64,
    /// Population standard deviation, `sqrt(S / n)`.
    pub std_dev: f64,
}

/// Variance and standard deviation around `mean`.
///
/// `S` is the sum of squared deviations. The standard deviation reported is
/// the population one; the sample variance uses Bessel's correction and is
/// `None` when the sample holds a single value.
pub fn variance_and_sd(sample: &Sample, mean: f64) -> Dispersion {
    let mut squared_deviations = 0.0;
    for value in sample.values() {
        let deviation = value - mean;
        squared_deviations += deviation * deviation;
    }

    let count = sample.len();
    let population_variance = squared_deviations / count as f64;
    let sample_variance = match count {
        1 => None,
        n => Some(squared_deviations / (n - 1) as f64),
    };

    Dispersion {
        sample_variance,
        population_variance,
        std_dev: sqrt(population_variance),
    }
}
