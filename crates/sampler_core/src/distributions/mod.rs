//! # Distribution Generators
//!
//! Each generator transforms draws from a [`UniformSource`] into samples of
//! one distribution using a closed-form or sum-based formula.
//!
//! | Distribution | Draws per sample | Transform |
//! |--------------|------------------|-----------|
//! | [`Uniform`] | 1 | `a + (b - a) x` |
//! | [`Gaussian`] | `n` (default 6) | `mean + scale sqrt(12/n) (Σx - n/2)` |
//! | [`Exponential`] | 1 | `-ln(x) / rate` |
//! | [`Gamma`] | `shape` | `-Σ ln(x) / rate` |
//! | [`Triangular`] | 2 | `a + (b - a) min(x1, x2)` |
//! | [`Simpson`] | 2 | `a + (b/2 - a/2) (x1 + x2)` |
//!
//! Draws are consumed in order, in non-overlapping groups, with no
//! rejection or re-draw. A sample depends only on its own group of draws.
//!
//! ## Preconditions
//!
//! Generators trust their parameters. Use the `validate` method of each
//! parameter struct before sampling; invalid parameters produce `NaN`,
//! infinities or silently wrong values rather than an error.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::distributions::{Generator, Triangular, TriangularParams};
//! use sampler_core::rng::{Lcg, LcgParams};
//!
//! let mut generator = Generator::new(Triangular, Lcg::new(LcgParams::default()));
//! let params = TriangularParams { a: 0.0, b: 1.0 };
//!
//! let samples: Vec<f64> = generator.generate_sequence(params, 1000).collect();
//! assert_eq!(samples.len(), 1000);
//! assert!(samples.iter().all(|&y| (0.0..=1.0).contains(&y)));
//! ```

mod exponential;
mod gamma;
mod gaussian;
mod kind;
mod simpson;
mod triangular;
mod uniform;

pub use exponential::{Exponential, ExponentialParams};
pub use gamma::{Gamma, GammaParams};
pub use gaussian::{Gaussian, GaussianParams, DEFAULT_GAUSSIAN_TERMS};
pub use kind::DistributionKind;
pub use simpson::{Simpson, SimpsonParams};
pub use triangular::{Triangular, TriangularParams};
pub use uniform::{Uniform, UniformParams};

use crate::error::ParamError;
use crate::rng::UniformSource;

/// A transform from uniform draws to samples of one distribution.
pub trait Distribution {
    /// Parameters of the distribution.
    type Params: Copy;

    /// Human-readable distribution name.
    const NAME: &'static str;

    /// Number of uniform draws consumed by one call to [`Distribution::sample`].
    fn draws_per_sample(&self, params: &Self::Params) -> usize;

    /// Produces one sample, consuming exactly
    /// [`draws_per_sample`](Distribution::draws_per_sample) draws from `source`.
    fn sample<S: UniformSource>(&self, params: &Self::Params, source: &mut S) -> f64;
}

/// Pairs a distribution with the uniform source it exclusively owns.
///
/// Successive calls to [`Generator::generate_sequence`] continue the same
/// stream. To restart from the seed, build a new generator (or reset the
/// source through [`Generator::source_mut`]).
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::{Exponential, ExponentialParams, Generator};
/// use sampler_core::rng::Replay;
///
/// let mut generator = Generator::new(Exponential, Replay::new(vec![0.5]));
/// let params = ExponentialParams { rate: 2.0 };
///
/// let y = generator.generate_sequence(params, 1).next().unwrap();
/// assert!((y - 0.3466).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<D, S> {
    distribution: D,
    source: S,
}

impl<D: Distribution, S: UniformSource> Generator<D, S> {
    /// Creates a generator that draws from `source`.
    pub fn new(distribution: D, source: S) -> Self {
        Self {
            distribution,
            source,
        }
    }

    /// Returns the distribution transform.
    #[inline]
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Returns the underlying source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the underlying source mutably.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the generator, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Number of uniform draws needed for `size` samples, saturating at
    /// `usize::MAX`.
    #[inline]
    pub fn uniform_draws_for(&self, params: &D::Params, size: usize) -> usize {
        self.distribution
            .draws_per_sample(params)
            .saturating_mul(size)
    }

    /// Returns a lazy sequence of exactly `size` samples.
    ///
    /// Draws are taken from the source only as samples are pulled; stopping
    /// early leaves the remaining draws untouched.
    pub fn generate_sequence(&mut self, params: D::Params, size: usize) -> Samples<'_, D, S> {
        Samples {
            distribution: &self.distribution,
            source: &mut self.source,
            params,
            remaining: size,
        }
    }
}

/// Finite sample sequence returned by [`Generator::generate_sequence`].
pub struct Samples<'a, D: Distribution, S> {
    distribution: &'a D,
    source: &'a mut S,
    params: D::Params,
    remaining: usize,
}

impl<D: Distribution, S: UniformSource> Iterator for Samples<'_, D, S> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.distribution.sample(&self.params, &mut *self.source))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<D: Distribution, S: UniformSource> ExactSizeIterator for Samples<'_, D, S> {}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NotFinite { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositive { name, value })
    }
}

fn check_interval(a: f64, b: f64) -> Result<(), ParamError> {
    check_finite("a", a)?;
    check_finite("b", b)?;
    if b > a {
        Ok(())
    } else {
        Err(ParamError::EmptyInterval { a, b })
    }
}
