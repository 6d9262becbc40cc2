//! Catalogue of the supported distributions.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownDistribution;

/// The distributions a sampler run can be asked for.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::DistributionKind;
///
/// let kind: DistributionKind = "gauss".parse().unwrap();
/// assert_eq!(kind, DistributionKind::Gaussian);
/// assert_eq!(kind.display_name(), "Gaussian");
/// assert_eq!(kind.to_string(), "gauss");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    /// Continuous uniform on `[a, b)`.
    Uniform,
    /// Summed-uniform normal approximation.
    Gaussian,
    /// Exponential by inverse-CDF.
    Exponential,
    /// Integer-shape gamma.
    Gamma,
    /// Triangular with mode at the lower bound.
    Triangular,
    /// Symmetric triangular with mode at the midpoint.
    Simpson,
}

impl DistributionKind {
    /// Every kind, in selector order.
    pub const ALL: [DistributionKind; 6] = [
        DistributionKind::Uniform,
        DistributionKind::Gaussian,
        DistributionKind::Exponential,
        DistributionKind::Gamma,
        DistributionKind::Triangular,
        DistributionKind::Simpson,
    ];

    /// Short command-line selector.
    pub fn selector(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Gaussian => "gauss",
            DistributionKind::Exponential => "exp",
            DistributionKind::Gamma => "gamma",
            DistributionKind::Triangular => "triangular",
            DistributionKind::Simpson => "simpson",
        }
    }

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Gaussian => "Gaussian",
            DistributionKind::Exponential => "Exponential",
            DistributionKind::Gamma => "Gamma",
            DistributionKind::Triangular => "Triangular",
            DistributionKind::Simpson => "Simpson",
        }
    }
}

impl FromStr for DistributionKind {
    type Err = UnknownDistribution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistributionKind::ALL
            .into_iter()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| UnknownDistribution(s.to_string()))
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{
        Distribution, Exponential, Gamma, Gaussian, Simpson, Triangular, Uniform,
    };

    #[test]
    fn test_selectors_round_trip() {
        for kind in DistributionKind::ALL {
            assert_eq!(kind.selector().parse::<DistributionKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_selector() {
        let err = "normal".parse::<DistributionKind>().unwrap_err();
        assert_eq!(err, UnknownDistribution("normal".to_string()));
        assert!("Uniform".parse::<DistributionKind>().is_err());
    }

    #[test]
    fn test_display_names_match_generators() {
        assert_eq!(DistributionKind::Uniform.display_name(), Uniform::NAME);
        assert_eq!(DistributionKind::Gaussian.display_name(), Gaussian::NAME);
        assert_eq!(DistributionKind::Exponential.display_name(), Exponential::NAME);
        assert_eq!(DistributionKind::Gamma.display_name(), Gamma::NAME);
        assert_eq!(DistributionKind::Triangular.display_name(), Triangular::NAME);
        assert_eq!(DistributionKind::Simpson.display_name(), Simpson::NAME);
    }
}
