//! distgen - Distribution Random Number Generator
//!
//! Samples one of six distributions over a linear congruential stream and
//! reports its statistics.
//!
//! # Usage
//!
//! - `distgen uniform` - Uniform on `[a, b)`
//! - `distgen gauss` - Approximate normal from summed uniforms
//! - `distgen exp` - Exponential with rate `λ`
//! - `distgen gamma` - Gamma with integer shape
//! - `distgen triangular` - Left-peaked triangular on `[a, b]`
//! - `distgen simpson` - Symmetric triangular on `[a, b]`
//!
//! Parameters are read interactively from standard input.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use sampler_core::distributions::DistributionKind;
use service_cli::commands::sample;
use service_cli::config::SamplerConfig;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Distribution Random Number Generator
#[derive(Parser)]
#[command(name = "distgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Distribution to sample: uniform, gauss, exp, gamma, triangular or simpson
    #[arg(value_parser = str::parse::<DistributionKind>)]
    distribution: DistributionKind,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path [default: distgen.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of samples to generate
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Seed of the uniform stream
    #[arg(long)]
    seed: Option<u64>,

    /// Number of histogram bins
    #[arg(long)]
    bins: Option<usize>,

    /// Uniform draws summed per Gaussian sample
    #[arg(long)]
    terms: Option<usize>,
}

impl Cli {
    /// Apply command line overrides on top of file and environment settings
    fn apply_overrides(&self, mut config: SamplerConfig) -> SamplerConfig {
        if let Some(size) = self.size {
            config.sample_count = size;
        }
        if let Some(seed) = self.seed {
            config.lcg.seed = seed;
        }
        if let Some(bins) = self.bins {
            config.histogram_bins = bins;
        }
        if let Some(terms) = self.terms {
            config.gaussian_terms = terms;
        }
        config
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<SamplerConfig> {
    let config =
        SamplerConfig::from_path_or_default(cli.config.as_deref())?.with_env_override()?;
    let config = cli.apply_overrides(config);
    config.validate()?;
    Ok(config)
}

fn init_tracing(cli: &Cli, config: Option<&SamplerConfig>) {
    let fallback = if cli.verbose {
        "debug"
    } else {
        config.map_or("info", |c| c.log_level.as_filter_str())
    };

    // Logs go to stderr so prompts and the report own stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .init();
}

fn run(cli: &Cli, config: &SamplerConfig) -> anyhow::Result<()> {
    let kind = cli.distribution;
    debug!(?config, "Configuration loaded");
    info!("Distribution: {}", kind.display_name());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    sample::execute(kind, config, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let config = load_config(&cli);
    init_tracing(&cli, config.as_ref().ok());

    let result = config.and_then(|config| run(&cli, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
