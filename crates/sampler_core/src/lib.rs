//! # sampler_core: Uniform Stream and Distribution Transforms
//!
//! ## Kernel Role
//!
//! sampler_core is the numeric kernel of the distgen workspace, providing:
//! - A linear congruential uniform stream (`rng::Lcg`, `rng::random_sequence`)
//! - The `rng::UniformSource` abstraction and alternative sources
//! - Six distribution generators (`distributions`)
//! - Parameter types with validation for the reader layer
//! - Sample statistics and histogram binning (`stats`)
//! - Error types: `LcgError`, `ParamError`, `StatsError`, `UnknownDistribution`
//!
//! ## Determinism
//!
//! Every sequence is a pure function of the LCG parameters and the number
//! of draws taken. There is no global state; each generator owns its source.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::distributions::{Gamma, GammaParams, Generator};
//! use sampler_core::rng::{Lcg, LcgParams};
//! use sampler_core::stats::Summary;
//!
//! let params = GammaParams { shape: 3, rate: 2.0 };
//! params.validate().unwrap();
//!
//! let mut generator = Generator::new(Gamma, Lcg::new(LcgParams::default()));
//! let samples: Vec<f64> = generator.generate_sequence(params, 50_000).collect();
//!
//! let summary = Summary::from_samples(&samples).unwrap();
//! assert!((summary.mean - 1.5).abs() < 0.05);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for parameter structs and `LcgParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod error;
pub mod rng;
pub mod stats;

pub use error::{LcgError, ParamError, StatsError, UnknownDistribution};
