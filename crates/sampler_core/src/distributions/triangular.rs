//! Right-triangular distribution via the minimum of two uniforms.

use super::{check_interval, Distribution};
use crate::error::ParamError;
use crate::rng::UniformSource;

/// Parameters of the triangular distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangularParams {
    /// Lower bound, where the density peaks.
    pub a: f64,
    /// Upper bound, `b > a`.
    pub b: f64,
}

impl TriangularParams {
    /// Checks that both bounds are finite and `b > a`.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_interval(self.a, self.b)
    }
}

/// Triangular distribution on `[a, b]` with its mode at `a`.
///
/// Each pair of draws `(x1, x2)` maps to `a + (b - a) * min(x1, x2)`; the
/// minimum of two uniforms has density `2(1 - t)`, so the mean is
/// `a + (b - a) / 3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triangular;

impl Distribution for Triangular {
    type Params = TriangularParams;

    const NAME: &'static str = "Triangular";

    #[inline]
    fn draws_per_sample(&self, _params: &TriangularParams) -> usize {
        2
    }

    #[inline]
    fn sample<S: UniformSource>(&self, params: &TriangularParams, source: &mut S) -> f64 {
        let x1 = source.next_uniform();
        let x2 = source.next_uniform();
        params.a + (params.b - params.a) * x1.min(x2)
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
    fn test_pairs_take_minimum() {
        let draws = vec![0.8, 0.3, 0.1, 0.6];
        let mut generator = Generator::new(Triangular, Replay::new(draws));
        let params = TriangularParams { a: 0.0, b: 10.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, 2).collect();
        assert_relative_eq!(samples[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(samples[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_run_range_and_mean() {
        let mut generator = Generator::new(Triangular, reference_lcg());
        let params = TriangularParams { a: -3.0, b: 9.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, REFERENCE_SIZE).collect();
        assert!(samples.iter().all(|&y| (-3.0..=9.0).contains(&y)));

        let summary = Summary::from_samples(&samples).unwrap();
        // a + (b - a) / 3 and (b - a)^2 / 18
        assert_relative_eq!(summary.mean, 1.0, epsilon = 0.05);
        assert_relative_eq!(summary.variance, 8.0, epsilon = 0.15);
    }

    #[test]
    fn test_mass_concentrates_near_lower_bound() {
        let mut generator = Generator::new(Triangular, reference_lcg());
        let params = TriangularParams { a: 0.0, b: 1.0 };

        let samples: Vec<f64> = generator.generate_sequence(params, REFERENCE_SIZE).collect();
        let lower_half = samples.iter().filter(|&&y| y < 0.5).count() as f64;
        // P(min < 1/2) = 3/4
        assert_relative_eq!(lower_half / REFERENCE_SIZE as f64, 0.75, epsilon = 0.01);
    }

    #[test]
    fn test_validate() {
        assert!(TriangularParams { a: 0.0, b: 1.0 }.validate().is_ok());
        assert!(TriangularParams { a: 2.0, b: 1.0 }.validate().is_err());
    }
}
