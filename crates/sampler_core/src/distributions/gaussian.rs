//! Approximate normal distribution via summed uniforms (Irwin–Hall).
//!
//! The sum of `n` independent `U[0, 1)` draws has mean `n/2` and variance
//! `n/12`; centring and rescaling it gives a variate whose distribution
//! approaches the normal as `n` grows. Each sample costs `n` draws.

use super::{check_finite, Distribution};
use crate::error::ParamError;
use crate::rng::UniformSource;

/// Number of draws summed per sample unless configured otherwise.
pub const DEFAULT_GAUSSIAN_TERMS: usize = 6;

/// Parameters of the Gaussian distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianParams {
    /// Mean of the distribution.
    pub mean: f64,
    /// Scale, acting as the standard deviation.
    pub scale: f64,
}

impl GaussianParams {
    /// Checks that mean and scale are finite.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_finite("mean", self.mean)?;
        check_finite("scale", self.scale)
    }
}

/// Gaussian distribution approximated by the sum of `terms` uniforms.
///
/// Each sample is `mean + scale * sqrt(12/n) * (Σx - n/2)` over a
/// non-overlapping chunk of `n` draws. The number of terms is fixed at
/// construction; accuracy improves with `n` at proportional cost.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::{Gaussian, DEFAULT_GAUSSIAN_TERMS};
///
/// assert_eq!(Gaussian::default().terms(), DEFAULT_GAUSSIAN_TERMS);
/// assert_eq!(Gaussian::with_terms(12).terms(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gaussian {
    terms: usize,
}

impl Default for Gaussian {
    fn default() -> Self {
        Self {
            terms: DEFAULT_GAUSSIAN_TERMS,
        }
    }
}

impl Gaussian {
    /// Creates a generator summing `terms` draws per sample.
    ///
    /// # Panics
    ///
    /// Panics if `terms == 0`.
    pub fn with_terms(terms: usize) -> Self {
        assert!(terms > 0, "terms must be > 0");
        Self { terms }
    }

    /// Number of draws summed per sample.
    #[inline]
    pub fn terms(&self) -> usize {
        self.terms
    }
}

impl Distribution for Gaussian {
    type Params = GaussianParams;

    const NAME: &'static str = "Gaussian";

    #[inline]
    fn draws_per_sample(&self, _params: &GaussianParams) -> usize {
        self.terms
    }

    fn sample<S: UniformSource>(&self, params: &GaussianParams, source: &mut S) -> f64 {
        let n = self.terms as f64;
        let sum: f64 = source.draws(self.terms).sum();
        params.mean + params.scale * (12.0 / n).sqrt() * (sum - n / 2.0)
    }
}
