//! Simpson (symmetric triangular) distribution via the sum of two uniforms.

use super::{check_interval, Distribution};
use crate::error::ParamError;
use crate::rng::UniformSource;

/// Parameters of the Simpson distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpsonParams {
    /// Lower bound.
    pub a: f64,
    /// Upper bound, `b > a`.
    pub b: f64,
}

impl SimpsonParams {
    /// Checks that both bounds are finite and `b > a`.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_interval(self.a, self.b)
    }
}

/// Simpson distribution on `[a, b]`, peaking at the midpoint.
///
/// Each pair of draws `(x1, x2)` maps to `a + (b/2 - a/2) * (x1 + x2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simpson;

impl Distribution for Simpson {
    type Params = SimpsonParams;

    const NAME: &'static str = "Simpson";

    #[inline]
    fn draws_per_sample(&self, _params: &SimpsonParams) -> usize {
        2
    }

    #[inline]
    fn sample<S: UniformSource>(&self, params: &SimpsonParams, source: &mut S) -> f64 {
        let x1 = source.next_uniform();
        let x2 = source.next_uniform();
        params.a + (params.b / 2.0 - params.a / 2.0) * (x1 + x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::test_support::{reference_lcg, REFERENCE_SIZE};
    use crate::distributions::Generator;
    use crate::rng::Replay;
    use crate::stats::Summary;
    use approx::assert_relative_eq;

    #[test]
    fn test_pairs_are_summed() {
        let draws = vec![0.5, 0.5, 0.0, 0.25];
        let mut generator = Generator::new(Simpson, Replay::new(draws));
        let params = SimpsonParams { a: 2.0, b: 6.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, 2).collect();
        assert_relative_eq!(samples[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(samples[1], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_run_range_and_mean() {
        let mut generator = Generator::new(Simpson, reference_lcg());
        let params = SimpsonParams { a: -3.0, b: 9.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, REFERENCE_SIZE).collect();
        assert!(samples.iter().all(|&y| (-3.0..=9.0).contains(&y)));

        let summary = Summary::from_samples(&samples).unwrap();
        // (a + b) / 2 and (b - a)^2 / 24
        assert_relative_eq!(summary.mean, 3.0, epsilon = 0.05);
        assert_relative_eq!(summary.variance, 6.0, epsilon = 0.1);
    }

    #[test]
    fn test_symmetric_about_midpoint() {
        let mut generator = Generator::new(Simpson, reference_lcg());
        let params = SimpsonParams { a: 0.0, b: 1.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, REFERENCE_SIZE).collect();
        let below = samples.iter().filter(|&&y| y < 0.5).count() as f64;
        assert_relative_eq!(below / REFERENCE_SIZE as f64, 0.5, epsilon = 0.01);
    }

    #[test]
    fn test_validate() {
        assert!(SimpsonParams { a: -1.0, b: 1.0 }.validate().is_ok());
        assert!(SimpsonParams { a: 0.0, b: f64::NAN }.validate().is_err());
    }
}
