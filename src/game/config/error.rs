//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a [`super::WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for a `WorldConfig`.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The config parsed but describes an unusable world.
    #[error("invalid config: {0}")]
    Invalid(String),
}
