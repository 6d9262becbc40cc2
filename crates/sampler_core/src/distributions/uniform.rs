//! Continuous uniform distribution on `[a, b)`.

use super::{check_interval, Distribution};
use crate::error::ParamError;
use crate::rng::UniformSource;

/// Parameters of the uniform distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformParams {
    /// Lower bound (inclusive).
    pub a: f64,
    /// Upper bound (exclusive), `b > a`.
    pub b: f64,
}

impl UniformParams {
    /// Checks that both bounds are finite and `b > a`.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_interval(self.a, self.b)
    }
}

/// Uniform distribution: one draw `x` maps to `a + (b - a) * x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uniform;

impl Distribution for Uniform {
    type Params = UniformParams;

    const NAME: &'static str = "Uniform";

    #[inline]
    fn draws_per_sample(&self, _params: &UniformParams) -> usize {
        1
    }

    #[inline]
    fn sample<S: UniformSource>(&self, params: &UniformParams, source: &mut S) -> f64 {
        let x = source.next_uniform();
        params.a + (params.b - params.a) * x
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
    fn test_unit_interval_is_identity() {
        let mut generator = Generator::new(Uniform, Replay::new(vec![0.2, 0.5, 0.9]));
        let params = UniformParams { a: 0.0, b: 1.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, 3).collect();
        assert_eq!(samples, vec![0.2, 0.5, 0.9]);
    }

    #[test]
    fn test_affine_mapping() {
        let mut generator = Generator::new(Uniform, Replay::new(vec![0.0, 0.25, 0.5]));
        let params = UniformParams { a: -2.0, b: 6.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, 3).collect();
        assert_eq!(samples, vec![-2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_reference_run_range_and_moments() {
        let mut generator = Generator::new(Uniform, reference_lcg());
        let params = UniformParams { a: 2.0, b: 5.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, REFERENCE_SIZE).collect();
        assert!(samples.iter().all(|&y| (2.0..5.0).contains(&y)));

        let summary = Summary::from_samples(&samples).unwrap();
        // (a + b) / 2 and (b - a)^2 / 12
        assert_relative_eq!(summary.mean, 3.5, epsilon = 0.02);
        assert_relative_eq!(summary.variance, 0.75, epsilon = 0.01);
    }

    #[test]
    fn test_validate() {
        assert!(UniformParams { a: 0.0, b: 1.0 }.validate().is_ok());
        assert_eq!(
            UniformParams { a: 1.0, b: 1.0 }.validate(),
            Err(ParamError::EmptyInterval { a: 1.0, b: 1.0 })
        );
        assert!(UniformParams { a: f64::NAN, b: 1.0 }.validate().is_err());
    }
}
