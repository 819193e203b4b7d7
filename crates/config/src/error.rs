//! Configuration Errors

use thiserror::Error;

/// Errors raised while loading settings or domain configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse domain configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
