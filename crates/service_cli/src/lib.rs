//! distgen: sample a chosen distribution over a deterministic LCG stream.
//!
//! The `distgen` binary prompts for the distribution's parameters, draws a
//! fixed-size sample and prints its statistics with a frequency histogram.
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires configuration, interactive
//! input and reporting around the `sampler_core` kernel.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use error::{CliError, Result};
