//! Configuration for the bank assistant
//!
//! Two layers:
//! - `Settings`: process-level server settings with `BANK_ASSISTANT_*`
//!   environment overrides
//! - `DomainConfig`: brand identity, exchange-rate table and branch
//!   directory, compiled-in defaults with optional YAML override

pub mod domain;
pub mod error;
pub mod settings;

pub use domain::{Branch, BrandConfig, DomainConfig, ExchangeRate};
pub use error::ConfigError;
pub use settings::Settings;
