//! Domain Configuration
//!
//! Brand identity, exchange-rate table and branch directory used by the
//! response handlers. Ships with compiled-in defaults; a YAML file can
//! override any section. Exchange rates and branches are ordered
//! sequences, never maps, so they render in the configured order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bank identity woven into response copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_bank_name")]
    pub bank_name: String,
    /// Helpline as displayed, including any vanity number.
    #[serde(default = "default_helpline")]
    pub helpline: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
}

fn default_bank_name() -> String {
    "XYZ Bank".to_string()
}

fn default_helpline() -> String {
    "1-800-XYZ-BANK (1-800-999-2265)".to_string()
}

fn default_support_email() -> String {
    "support@xyzbank.com".to_string()
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            bank_name: default_bank_name(),
            helpline: default_helpline(),
            support_email: default_support_email(),
        }
    }
}

/// One row of the exchange-rate table, quoted against USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// ISO currency code, e.g. "EUR".
    pub code: String,
    /// Units of this currency per 1 USD.
    pub rate: f64,
}

/// One entry of the branch directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub address: String,
    /// Opening hours as displayed, e.g. "9AM-5PM Mon-Fri".
    pub hours: String,
}

/// Domain configuration loaded from domain.yaml (or the defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default = "default_exchange_rates")]
    pub exchange_rates: Vec<ExchangeRate>,
    #[serde(default = "default_branches")]
    pub branches: Vec<Branch>,
}

fn default_exchange_rates() -> Vec<ExchangeRate> {
    [
        ("USD", 1.0),
        ("EUR", 0.85),
        ("GBP", 0.72),
        ("JPY", 110.25),
        ("CAD", 1.21),
    ]
    .into_iter()
    .map(|(code, rate)| ExchangeRate {
        code: code.to_string(),
        rate,
    })
    .collect()
}

fn default_branches() -> Vec<Branch> {
    [
        (
            "Main Branch",
            "123 Financial St, New York",
            "9AM-5PM Mon-Fri",
        ),
        (
            "Downtown Branch",
            "456 Commerce Ave, New York",
            "10AM-6PM Mon-Fri, 10AM-2PM Sat",
        ),
        ("Westside ATM Center", "789 Urban Blvd, New York", "24/7"),
    ]
    .into_iter()
    .map(|(name, address, hours)| Branch {
        name: name.to_string(),
        address: address.to_string(),
        hours: hours.to_string(),
    })
    .collect()
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            exchange_rates: default_exchange_rates(),
            branches: default_branches(),
        }
    }
}

impl DomainConfig {
    /// Load from a YAML file. Sections missing from the file keep their
    /// compiled-in defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded domain configuration");
        Ok(config)
    }
}
