//! Sampler configuration management.
//!
//! Handles loading the run configuration from a TOML file with environment
//! variable overrides. Defaults reproduce the reference runs exactly.
//!
//! ```toml
//! sample_count = 50000
//! histogram_bins = 20
//! gaussian_terms = 6
//! log_level = "info"
//!
//! [lcg]
//! multiplier = 32771
//! modulus = 1046527
//! seed = 65537
//! ```

use std::path::Path;
use std::str::FromStr;

use sampler_core::distributions::DEFAULT_GAUSSIAN_TERMS;
use sampler_core::rng::LcgParams;
use serde::Deserialize;
use thiserror::Error;

/// Number of samples in a reference run.
pub const DEFAULT_SAMPLE_COUNT: usize = 50_000;

/// Number of histogram bins in a reference run.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Upper bound on `sample_count`.
pub const MAX_SAMPLE_COUNT: usize = 100_000_000;

/// Upper bound on `histogram_bins` and `gaussian_terms`.
pub const MAX_BINS_OR_TERMS: usize = 10_000;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "distgen.toml";

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "DISTGEN_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Environment variable {name}: cannot parse '{value}'")]
    EnvError { name: String, value: String },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Sampler run configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// Number of samples per run
    pub sample_count: usize,
    /// Number of histogram bins
    pub histogram_bins: usize,
    /// Uniform draws summed per Gaussian sample
    pub gaussian_terms: usize,
    /// Fallback log level when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Uniform stream parameters
    pub lcg: LcgParams,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            gaussian_terms: DEFAULT_GAUSSIAN_TERMS,
            log_level: LogLevel::default(),
            lcg: LcgParams::default(),
        }
    }
}

impl SamplerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration from `path`, or the defaults if the file is absent.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the file the user named, or the optional default file.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`]
    /// is read if present and the defaults are used otherwise.
    pub fn from_path_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Apply `DISTGEN_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up by variable name.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parsed(&lookup, "SAMPLE_COUNT")? {
            self.sample_count = value;
        }
        if let Some(value) = parsed(&lookup, "HISTOGRAM_BINS")? {
            self.histogram_bins = value;
        }
        if let Some(value) = parsed(&lookup, "GAUSSIAN_TERMS")? {
            self.gaussian_terms = value;
        }
        if let Some(value) = lookup(&format!("{ENV_PREFIX}LOG_LEVEL")) {
            self.log_level = value.parse()?;
        }
        if let Some(value) = parsed(&lookup, "LCG_MULTIPLIER")? {
            self.lcg.multiplier = value;
        }
        if let Some(value) = parsed(&lookup, "LCG_MODULUS")? {
            self.lcg.modulus = value;
        }
        if let Some(value) = parsed(&lookup, "LCG_SEED")? {
            self.lcg.seed = value;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Sample variance needs at least two values
        if self.sample_count < 2 {
            errors.push(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            ));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            errors.push(format!(
                "sample_count {} exceeds maximum allowed ({})",
                self.sample_count, MAX_SAMPLE_COUNT
            ));
        }

        if self.histogram_bins == 0 || self.histogram_bins > MAX_BINS_OR_TERMS {
            errors.push(format!(
                "histogram_bins must be between 1 and {}, got {}",
                MAX_BINS_OR_TERMS, self.histogram_bins
            ));
        }

        if self.gaussian_terms == 0 || self.gaussian_terms > MAX_BINS_OR_TERMS {
            errors.push(format!(
                "gaussian_terms must be between 1 and {}, got {}",
                MAX_BINS_OR_TERMS, self.gaussian_terms
            ));
        }

        if let Err(e) = self.lcg.validate() {
            errors.push(format!("lcg: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn parsed<T, F>(lookup: &F, suffix: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let name = format!("{ENV_PREFIX}{suffix}");
    match lookup(&name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvError { name, value }),
    }
}
