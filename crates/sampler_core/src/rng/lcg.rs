//! Linear congruential generator producing the uniform stream.
//!
//! This module provides [`Lcg`], an explicit state-carrying generator, and
//! [`random_sequence`], a finite lazy view over a freshly seeded stream.

use crate::error::LcgError;

/// Default LCG multiplier used by reference runs.
pub const DEFAULT_MULTIPLIER: u64 = 32_771;

/// Default LCG modulus used by reference runs (prime).
pub const DEFAULT_MODULUS: u64 = 1_046_527;

/// Default LCG seed used by reference runs.
pub const DEFAULT_SEED: u64 = 65_537;

/// Largest modulus for which every `r / m` is exactly representable and
/// strictly below 1.
pub const MAX_MODULUS: u64 = 1 << 53;

/// Immutable parameters of a multiplicative linear congruential generator.
///
/// The generated residues follow `r_i = (a * r_{i-1}) mod m`, starting from
/// the seed `r_0`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::LcgParams;
///
/// let params = LcgParams::default();
/// assert_eq!(params.multiplier, 32_771);
/// assert_eq!(params.modulus, 1_046_527);
/// assert_eq!(params.seed, 65_537);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LcgParams {
    /// Multiplier `a`.
    pub multiplier: u64,
    /// Modulus `m`.
    pub modulus: u64,
    /// Seed `r_0`.
    pub seed: u64,
}

impl Default for LcgParams {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            modulus: DEFAULT_MODULUS,
            seed: DEFAULT_SEED,
        }
    }
}

impl LcgParams {
    /// Creates a new parameter triple without validation.
    #[inline]
    pub const fn new(multiplier: u64, modulus: u64, seed: u64) -> Self {
        Self {
            multiplier,
            modulus,
            seed,
        }
    }

    /// Returns a copy of these parameters with a different seed.
    #[inline]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Checks `0 < m <= 2^53`, `0 < a < m` and `r_0 < m`.
    ///
    /// [`Lcg`] itself never calls this; it is offered to the configuration
    /// layer that builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as an [`LcgError`].
    pub fn validate(&self) -> Result<(), LcgError> {
        if self.modulus == 0 {
            return Err(LcgError::ZeroModulus);
        }
        if self.modulus > MAX_MODULUS {
            return Err(LcgError::ModulusTooLarge {
                modulus: self.modulus,
            });
        }
        if self.multiplier == 0 || self.multiplier >= self.modulus {
            return Err(LcgError::MultiplierOutOfRange {
                multiplier: self.multiplier,
                modulus: self.modulus,
            });
        }
        if self.seed >= self.modulus {
            return Err(LcgError::SeedOutOfRange {
                seed: self.seed,
                modulus: self.modulus,
            });
        }
        Ok(())
    }
}

/// Multiplicative linear congruential generator.
///
/// Carries its current residue explicitly; every draw advances it by one
/// step. Two generators built from the same [`LcgParams`] produce identical
/// sequences element for element, and [`Lcg::reset`] rewinds to the seed.
///
/// The residue product is computed in 128-bit arithmetic so any `u64`
/// modulus is exact. Moduli above [`MAX_MODULUS`] may round `r / m` up to
/// `1.0` in `f64`.
///
/// # Preconditions
///
/// `m > 0` and `0 < a < m`. These are not checked here; see
/// [`LcgParams::validate`]. A zero modulus makes every draw `NaN`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{Lcg, LcgParams};
///
/// let mut lcg = Lcg::new(LcgParams::default());
/// let first = lcg.next_uniform();
///
/// // (32771 * 65537) mod 1046527 = 239623
/// assert_eq!(lcg.residue(), 239_623);
/// assert_eq!(first, 239_623.0 / 1_046_527.0);
///
/// lcg.reset();
/// assert_eq!(lcg.next_uniform(), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    params: LcgParams,
    residue: u64,
}

impl Lcg {
    /// Creates a generator positioned at the seed.
    #[inline]
    pub fn new(params: LcgParams) -> Self {
        Self {
            params,
            residue: params.seed,
        }
    }

    /// Returns the parameters this generator was initialised with.
    #[inline]
    pub fn params(&self) -> LcgParams {
        self.params
    }

    /// Returns the current residue `r_i` (the seed before the first draw).
    #[inline]
    pub fn residue(&self) -> u64 {
        self.residue
    }

    /// Rewinds the generator to its seed.
    #[inline]
    pub fn reset(&mut self) {
        self.residue = self.params.seed;
    }

    /// Advances one step and returns the new residue `r_i`.
    #[inline]
    pub fn next_residue(&mut self) -> u64 {
        let LcgParams {
            multiplier,
            modulus,
            ..
        } = self.params;
        if modulus == 0 {
            return 0;
        }
        self.residue = ((multiplier as u128 * self.residue as u128) % modulus as u128) as u64;
        self.residue
    }

    /// Advances one step and returns `r_i / m`, a value in `[0, 1)`.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        let residue = self.next_residue();
        residue as f64 / self.params.modulus as f64
    }
}

/// Returns a lazy sequence of exactly `count` uniforms from a fresh
/// generator seeded with `params`.
///
/// Calling this twice with the same arguments reproduces the same values;
/// nothing is shared between the two sequences.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{random_sequence, LcgParams};
///
/// let first: Vec<f64> = random_sequence(LcgParams::default(), 4).collect();
/// let again: Vec<f64> = random_sequence(LcgParams::default(), 4).collect();
/// assert_eq!(first.len(), 4);
/// assert_eq!(first, again);
/// ```
pub fn random_sequence(params: LcgParams, count: usize) -> RandomSequence {
    RandomSequence {
        lcg: Lcg::new(params),
        remaining: count,
    }
}

/// Finite uniform sequence returned by [`random_sequence`].
#[derive(Debug, Clone)]
pub struct RandomSequence {
    lcg: Lcg,
    remaining: usize,
}

impl Iterator for RandomSequence {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.lcg.next_uniform())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RandomSequence {}

impl std::iter::FusedIterator for RandomSequence {}
