//! Configuration loading from config.toml
//!
//! The configuration file holds the display settings (currency) and the records the
//! session starts with. Records are listed newest first, the way they are shown.

use crate::{
    core::currency::{Currency, CurrencyFormatter},
    entities::{ContractModel, OrderModel},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "AFFAIRES_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Contracts to seed
    #[serde(default)]
    pub contracts: Vec<ContractModel>,
    /// Orders to seed
    #[serde(default)]
    pub orders: Vec<OrderModel>,
}

/// How amounts are rendered
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DisplayConfig {
    /// Currency every amount is expressed in
    #[serde(default)]
    pub currency: Currency,
}

impl AppConfig {
    /// Formatter for the configured currency.
    #[must_use]
    pub const fn currency_formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.display.currency)
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A record has a missing field, an unknown status, or an unparseable date
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Path of the configuration file: `AFFAIRES_CONFIG` if set, else ./config.toml
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads configuration from [`config_path`].
///
/// # Errors
/// See [`load_config`].
pub fn load_default_config() -> Result<AppConfig> {
    load_config(config_path())
}
