//! Exponential distribution by inverse-CDF.

use super::{check_positive, Distribution};
use crate::error::ParamError;
use crate::rng::UniformSource;

/// Parameters of the exponential distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialParams {
    /// Rate `λ > 0`.
    pub rate: f64,
}

impl ExponentialParams {
    /// Checks that the rate is finite and positive.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_positive("rate", self.rate)
    }
}

/// Exponential distribution: one draw `x` maps to `-ln(x) / rate`.
///
/// # Zero Draws
///
/// A draw of exactly `0.0` yields `+∞`. The value is passed through as-is;
/// consumers that need finite statistics should filter it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exponential;

impl Distribution for Exponential {
    type Params = ExponentialParams;

    const NAME: &'static str = "Exponential";

    #[inline]
    fn draws_per_sample(&self, _params: &ExponentialParams) -> usize {
        1
    }

    #[inline]
    fn sample<S: UniformSource>(&self, params: &ExponentialParams, source: &mut S) -> f64 {
        let x = source.next_uniform();
        -1.0 / params.rate * x.ln()
    }
}
