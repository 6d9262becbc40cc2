//! Summary statistics over a finished sample.

use crate::error::StatsError;

/// Mean, variance and standard deviation of a sample.
///
/// The variance uses the `n - 1` (sample) divisor. Non-finite values are
/// not filtered: a single `+∞` makes the mean infinite and the variance
/// `NaN`, which is how degenerate draws surface to the consumer.
///
/// # Examples
///
/// ```rust
/// use sampler_core::stats::Summary;
///
/// let summary = Summary::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.mean, 2.5);
/// assert!((summary.variance - 5.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance.
    pub variance: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Summarises `samples` with a two-pass mean/variance.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] for fewer than two values,
    /// since the sample variance is undefined there.
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatsError> {
        let count = samples.len();
        if count < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: count,
            });
        }

        let mean = samples.iter().sum::<f64>() / count as f64;
        let sum_sq: f64 = samples.iter().map(|&x| (x - mean) * (x - mean)).sum();
        let variance = sum_sq / (count - 1) as f64;

        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Ok(Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }

    /// True when mean and variance are both finite.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.variance.is_finite()
    }
}
