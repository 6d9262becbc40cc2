//! Error types for structured error handling.
//!
//! This module provides:
//! - `LcgError`: Invalid linear congruential generator parameters
//! - `ParamError`: Invalid distribution parameters
//! - `UnknownDistribution`: Unrecognised distribution selector
//! - `StatsError`: Samples that cannot be summarised or binned
//!
//! The generators themselves never return errors; invalid parameters are
//! preconditions checked by whoever builds the parameter structs.

use thiserror::Error;

/// Invalid LCG parameters.
///
/// # Examples
/// ```
/// use sampler_core::LcgError;
///
/// let err = LcgError::SeedOutOfRange { seed: 9, modulus: 7 };
/// assert_eq!(format!("{}", err), "Seed 9 must be below the modulus 7");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LcgError {
    /// The modulus is zero.
    #[error("Modulus must be positive")]
    ZeroModulus,

    /// The modulus exceeds 2^53.
    #[error("Modulus {modulus} exceeds 2^53")]
    ModulusTooLarge {
        /// The offending modulus
        modulus: u64,
    },

    /// The multiplier is not in `(0, m)`.
    #[error("Multiplier {multiplier} must satisfy 0 < a < {modulus}")]
    MultiplierOutOfRange {
        /// The offending multiplier
        multiplier: u64,
        /// The modulus it was checked against
        modulus: u64,
    },

    /// The seed is not in `[0, m)`.
    #[error("Seed {seed} must be below the modulus {modulus}")]
    SeedOutOfRange {
        /// The offending seed
        seed: u64,
        /// The modulus it was checked against
        modulus: u64,
    },
}

/// Invalid distribution parameters.
///
/// Produced by the `validate` methods of the parameter structs. Messages
/// name the offending parameter the way it is prompted for.
///
/// # Examples
/// ```
/// use sampler_core::ParamError;
///
/// let err = ParamError::NonPositive { name: "rate", value: -1.0 };
/// assert!(format!("{}", err).contains("rate"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamError {
    /// A value is NaN or infinite.
    #[error("{name} must be a valid float, got {value}")]
    NotFinite {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// A value that must be strictly positive is not.
    #[error("{name} must be a valid positive float, got {value}")]
    NonPositive {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// An integer that must be strictly positive is zero.
    #[error("{name} must be a valid positive integer")]
    ZeroCount {
        /// Parameter name
        name: &'static str,
    },

    /// The upper bound does not exceed the lower bound.
    #[error("b must be a valid float, greater than a (a = {a}, b = {b})")]
    EmptyInterval {
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },
}

/// A distribution selector that names no known distribution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown distribution: {0}. Supported: uniform, gauss, exp, gamma, triangular, simpson")]
pub struct UnknownDistribution(pub String);

/// Errors from summarising or binning a sample.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Not enough values for the requested statistic.
    #[error("At least {required} samples are required, got {actual}")]
    InsufficientData {
        /// Minimum number of values
        required: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// A histogram was requested with zero bins.
    #[error("Histogram requires at least one bin")]
    ZeroBins,

    /// No finite values were available to bin.
    #[error("No finite samples to bin")]
    NoFiniteSamples,
}
