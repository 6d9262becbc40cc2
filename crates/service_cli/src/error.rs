//! Error types for the distgen CLI.

use sampler_core::{ParamError, StatsError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// Distribution parameters rejected after reading
    #[error("Invalid parameters")]
    Params(#[from] ParamError),

    /// The sample could not be summarised
    #[error("Statistics error")]
    Stats(#[from] StatsError),

    /// Input ended before a parameter was read
    #[error("Input closed while reading '{0}'")]
    InputClosed(String),

    /// IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = CliError::InputClosed("rate".to_string());
        assert_eq!(err.to_string(), "Input closed while reading 'rate'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_wrapped_error_message_appears_once() {
        let err: CliError = ParamError::ZeroCount { name: "shape" }.into();
        assert_eq!(err.to_string(), "Invalid parameters");
        assert_eq!(
            err.source().map(|e| e.to_string()).as_deref(),
            Some("shape must be a valid positive integer")
        );

        let err: CliError = StatsError::NoFiniteSamples.into();
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained, "Statistics error: No finite samples to bin");
    }
}
