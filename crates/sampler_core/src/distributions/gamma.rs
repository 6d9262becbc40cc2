//! Gamma distribution with integer shape (Erlang) as a sum of exponentials.

use super::{check_positive, Distribution};
use crate::error::ParamError;
use crate::rng::UniformSource;

/// Parameters of the gamma distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaParams {
    /// Shape `k`, a positive integer.
    pub shape: u32,
    /// Rate `λ > 0`.
    pub rate: f64,
}

impl GammaParams {
    /// Checks `shape > 0` and a finite positive rate.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.shape == 0 {
            return Err(ParamError::ZeroCount { name: "shape" });
        }
        check_positive("rate", self.rate)
    }
}

/// Gamma distribution: each sample is `-Σ ln(x) / rate` over `shape`
/// consecutive draws.
///
/// This is the sum of `shape` independent exponential variates, so it is
/// only valid for integer shape. With `shape = 1` it reproduces
/// [`Exponential`](super::Exponential) exactly. A zero draw makes the
/// sample `+∞`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gamma;

impl Distribution for Gamma {
    type Params = GammaParams;

    const NAME: &'static str = "Gamma";

    #[inline]
    fn draws_per_sample(&self, params: &GammaParams) -> usize {
        params.shape as usize
    }

    fn sample<S: UniformSource>(&self, params: &GammaParams, source: &mut S) -> f64 {
        let log_sum: f64 = source.draws(params.shape as usize).map(f64::ln).sum();
        -1.0 / params.rate * log_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::test_support::{reference_lcg, REFERENCE_SIZE};
    use crate::distributions::{Exponential, ExponentialParams, Generator};
    use crate::rng::Replay;
    use crate::stats::Summary;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_one_matches_exponential() {
        let mut gamma = Generator::new(Gamma, reference_lcg());
        let mut exponential = Generator::new(Exponential, reference_lcg());

        let g: Vec<f64> = gamma
            .generate_sequence(GammaParams { shape: 1, rate: 2.0 }, 1000)
            .collect();
        let e: Vec<f64> = exponential
            .generate_sequence(ExponentialParams { rate: 2.0 }, 1000)
            .collect();
        assert_eq!(g, e);
    }

    #[test]
    fn test_log_sum_of_group() {
        let draws = vec![0.5, 0.25, 0.125];
        let mut generator = Generator::new(Gamma, Replay::new(draws));
        let params = GammaParams { shape: 3, rate: 1.0 };

        let y = generator.generate_sequence(params, 1).next().unwrap();
        // -(ln 2^-1 + ln 2^-2 + ln 2^-3) = 6 ln 2
        assert_relative_eq!(y, 6.0 * 2.0_f64.ln(), epsilon = 1e-12);
        assert_eq!(generator.source().position(), 3);
    }

    #[test]
    fn test_zero_draw_in_group_is_infinite() {
        let mut generator = Generator::new(Gamma, Replay::new(vec![0.5, 0.0]));
        let params = GammaParams { shape: 2, rate: 3.0 };

        let y = generator.generate_sequence(params, 1).next().unwrap();
        assert_eq!(y, f64::INFINITY);
    }

    #[test]
    fn test_reference_run_moments() {
        let mut generator = Generator::new(Gamma, reference_lcg());
        let params = GammaParams { shape: 3, rate: 2.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, REFERENCE_SIZE).collect();
        assert!(samples.iter().all(|&y| y > 0.0));

        let summary = Summary::from_samples(&samples).unwrap();
        // k / λ and k / λ^2
        assert_relative_eq!(summary.mean, 1.5, epsilon = 0.02);
        assert_relative_eq!(summary.variance, 0.75, epsilon = 0.02);
    }

    #[test]
    fn test_validate() {
        assert!(GammaParams { shape: 2, rate: 1.0 }.validate().is_ok());
        assert_eq!(
            GammaParams { shape: 0, rate: 1.0 }.validate(),
            Err(ParamError::ZeroCount { name: "shape" })
        );
        assert!(GammaParams { shape: 2, rate: 0.0 }.validate().is_err());
    }
}
