//! Statistics over a finished sample.
//!
//! - [`Summary`]: mean, sample variance and standard deviation
//! - [`Histogram`]: equal-width relative-frequency bins

mod histogram;
mod summary;

pub use histogram::{Bin, Histogram};
pub use summary::Summary;
