//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("Configuration file '{}' does not exist", path.display())]
    MissingFile { path: PathBuf },

    /// No `[environments.<name>]` table for the requested environment.
    #[error("Environment '{name}' is not configured (known: {known})")]
    UnknownEnvironment { name: String, known: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
