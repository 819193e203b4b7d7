//! Server Settings
//!
//! Process-level settings for the HTTP server. Defaults are baked in and
//! every field can be overridden through `BANK_ASSISTANT_*` environment
//! variables (e.g. `BANK_ASSISTANT_PORT=9000`).

use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::ConfigError;

/// Runtime settings for the server process.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Interface to bind, default "0.0.0.0".
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind, default 8080.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional YAML file overriding the built-in domain configuration.
    #[serde(default)]
    pub domain_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            domain_file: None,
        }
    }
}

impl Settings {
    /// Load settings from the environment on top of the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port() as i64)?
            .add_source(
                Environment::with_prefix("BANK_ASSISTANT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
