//! CLI command implementations
//!
//! `sample` reads parameters, runs one generator and prints the report.

pub mod sample;
