//! Sample command implementation
//!
//! Draws `sample_count` values from the selected distribution over the
//! configured LCG, then summarises and bins them.

use std::io::{BufRead, Write};

use sampler_core::distributions::{
    Distribution, DistributionKind, Exponential, ExponentialParams, Gamma, GammaParams, Gaussian,
    GaussianParams, Generator, Simpson, SimpsonParams, Triangular, TriangularParams, Uniform,
    UniformParams,
};
use sampler_core::rng::Lcg;
use sampler_core::stats::{Histogram, Summary};
use sampler_core::ParamError;
use tracing::{debug, info, warn};

use crate::config::SamplerConfig;
use crate::input::ParameterReader;
use crate::report;
use crate::Result;

/// Parameters of whichever distribution was selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionParams {
    Uniform(UniformParams),
    Gaussian(GaussianParams),
    Exponential(ExponentialParams),
    Gamma(GammaParams),
    Triangular(TriangularParams),
    Simpson(SimpsonParams),
}

impl DistributionParams {
    /// Prompt for the parameters of `kind`
    pub fn read<R: BufRead, W: Write>(
        kind: DistributionKind,
        reader: &mut ParameterReader<R, W>,
    ) -> Result<Self> {
        Ok(match kind {
            DistributionKind::Uniform => Self::Uniform(reader.read_uniform()?),
            DistributionKind::Gaussian => Self::Gaussian(reader.read_gaussian()?),
            DistributionKind::Exponential => Self::Exponential(reader.read_exponential()?),
            DistributionKind::Gamma => Self::Gamma(reader.read_gamma()?),
            DistributionKind::Triangular => Self::Triangular(reader.read_triangular()?),
            DistributionKind::Simpson => Self::Simpson(reader.read_simpson()?),
        })
    }

    /// The distribution these parameters belong to
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::Uniform(_) => DistributionKind::Uniform,
            Self::Gaussian(_) => DistributionKind::Gaussian,
            Self::Exponential(_) => DistributionKind::Exponential,
            Self::Gamma(_) => DistributionKind::Gamma,
            Self::Triangular(_) => DistributionKind::Triangular,
            Self::Simpson(_) => DistributionKind::Simpson,
        }
    }

    /// Check the distribution's preconditions
    pub fn validate(&self) -> std::result::Result<(), ParamError> {
        match self {
            Self::Uniform(p) => p.validate(),
            Self::Gaussian(p) => p.validate(),
            Self::Exponential(p) => p.validate(),
            Self::Gamma(p) => p.validate(),
            Self::Triangular(p) => p.validate(),
            Self::Simpson(p) => p.validate(),
        }
    }
}

/// Outcome of one sampling run.
#[derive(Debug, Clone)]
pub struct SampleRun {
    pub kind: DistributionKind,
    pub samples: Vec<f64>,
    pub summary: Summary,
    pub histogram: Histogram,
}

/// Generate, summarise and bin a sample for `params`
pub fn run(params: DistributionParams, config: &SamplerConfig) -> Result<SampleRun> {
    params.validate()?;

    let kind = params.kind();
    info!("Sampling {} distribution...", kind.display_name());
    info!("  Sample count: {}", config.sample_count);
    debug!(
        multiplier = config.lcg.multiplier,
        modulus = config.lcg.modulus,
        seed = config.lcg.seed,
        "uniform stream"
    );

    let samples = match params {
        DistributionParams::Uniform(p) => collect(Uniform, p, config),
        DistributionParams::Gaussian(p) => {
            debug!(terms = config.gaussian_terms, "gaussian terms");
            collect(Gaussian::with_terms(config.gaussian_terms), p, config)
        }
        DistributionParams::Exponential(p) => collect(Exponential, p, config),
        DistributionParams::Gamma(p) => collect(Gamma, p, config),
        DistributionParams::Triangular(p) => collect(Triangular, p, config),
        DistributionParams::Simpson(p) => collect(Simpson, p, config),
    };

    let summary = Summary::from_samples(&samples)?;
    let histogram = Histogram::with_bins(&samples, config.histogram_bins)?;
    if histogram.skipped() > 0 {
        warn!(
            "{} of {} samples are not finite and were left out of the histogram",
            histogram.skipped(),
            samples.len()
        );
    }

    info!("Sampling complete");
    Ok(SampleRun {
        kind,
        samples,
        summary,
        histogram,
    })
}

fn collect<D: Distribution>(distribution: D, params: D::Params, config: &SamplerConfig) -> Vec<f64> {
    let mut generator = Generator::new(distribution, Lcg::new(config.lcg));
    debug!(
        draws = generator.uniform_draws_for(&params, config.sample_count),
        "{} generator",
        D::NAME
    );
    generator
        .generate_sequence(params, config.sample_count)
        .collect()
}

/// Prompt for parameters of `kind` on `input`/`output`, sample and print the report
pub fn execute<R: BufRead, W: Write>(
    kind: DistributionKind,
    config: &SamplerConfig,
    input: R,
    output: W,
) -> Result<SampleRun> {
    let mut reader = ParameterReader::new(input, output);
    let params = DistributionParams::read(kind, &mut reader)?;
    let run = run(params, config)?;

    let mut output = reader.into_output();
    report::render(&run, &mut output)?;
    output.flush()?;
    Ok(run)
}
