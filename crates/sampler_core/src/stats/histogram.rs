//! Equal-width frequency histogram.

use crate::error::StatsError;

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge; exclusive except for the last bin.
    pub upper: f64,
    /// Number of values in the bin.
    pub count: usize,
    /// `count` divided by the number of binned values.
    pub frequency: f64,
}

/// Relative-frequency histogram over the finite values of a sample.
///
/// Bins split `[min, max]` into equal widths; the last bin is closed so the
/// maximum is counted. When every value is equal the range is widened to
/// `[v - 0.5, v + 0.5]`. Non-finite values are skipped and reported through
/// [`Histogram::skipped`].
///
/// # Examples
///
/// ```rust
/// use sampler_core::stats::Histogram;
///
/// let histogram = Histogram::with_bins(&[0.0, 0.1, 0.6, 1.0], 2).unwrap();
/// assert_eq!(histogram.bins()[0].count, 2);
/// assert_eq!(histogram.bins()[1].count, 2);
/// assert_eq!(histogram.bins()[1].frequency, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
    total: usize,
    skipped: usize,
}

impl Histogram {
    /// Bins the finite values of `samples` into `bins` equal-width bins.
    ///
    /// # Errors
    ///
    /// - [`StatsError::ZeroBins`] if `bins == 0`
    /// - [`StatsError::NoFiniteSamples`] if no value is finite
    pub fn with_bins(samples: &[f64], bins: usize) -> Result<Self, StatsError> {
        if bins == 0 {
            return Err(StatsError::ZeroBins);
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut total = 0usize;
        for &x in samples.iter().filter(|x| x.is_finite()) {
            lo = lo.min(x);
            hi = hi.max(x);
            total += 1;
        }
        if total == 0 {
            return Err(StatsError::NoFiniteSamples);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &x in samples.iter().filter(|x| x.is_finite()) {
            let index = (((x - lo) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count,
                frequency: count as f64 / total as f64,
            })
            .collect();

        Ok(Self {
            bins,
            total,
            skipped: samples.len() - total,
        })
    }

    /// The bins in ascending order.
    #[inline]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of values that were binned.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of non-finite values that were skipped.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Highest relative frequency of any bin.
    pub fn max_frequency(&self) -> f64 {
        self.bins
            .iter()
            .map(|bin| bin.frequency)
            .fold(0.0, f64::max)
    }
}
