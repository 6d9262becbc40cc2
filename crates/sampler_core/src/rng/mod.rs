//! # Uniform Stream Infrastructure
//!
//! This module provides the uniform pseudo-random stream that every
//! distribution generator transforms.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the stream is a pure function of
//!   `(multiplier, modulus, seed, index)`
//! - **Explicit state**: [`Lcg`] carries its residue; there is no global
//!   generator, and each consumer owns its own stream
//! - **Laziness**: draws are produced on demand through finite iterators
//!
//! ## Module Structure
//!
//! - [`lcg`]: the linear congruential generator and [`random_sequence`]
//! - [`source`]: the [`UniformSource`] trait and alternative sources
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{random_sequence, Lcg, LcgParams, UniformSource};
//!
//! // Finite, restartable sequence
//! let values: Vec<f64> = random_sequence(LcgParams::default(), 5).collect();
//! assert_eq!(values.len(), 5);
//!
//! // Explicit generator with the same parameters yields the same values
//! let mut lcg = Lcg::new(LcgParams::default());
//! let again: Vec<f64> = lcg.draws(5).collect();
//! assert_eq!(values, again);
//! ```
//!
//! ## Zero Draws
//!
//! A draw is exactly `0.0` only when the residue reaches zero, which cannot
//! happen with a prime modulus and a non-zero seed (the default
//! configuration). With other parameters a zero draw is passed through
//! unchanged; logarithmic transforms then yield `+∞`.

pub mod lcg;
pub mod source;

// Public re-exports
pub use lcg::{
    random_sequence, Lcg, LcgParams, RandomSequence, DEFAULT_MODULUS, DEFAULT_MULTIPLIER,
    DEFAULT_SEED, MAX_MODULUS,
};
pub use source::{Draws, Replay, StdUniform, UniformSource};
