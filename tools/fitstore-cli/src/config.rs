//! CLI configuration.

use anyhow::{Context, Result};
use fitstore_core::StoreConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["fitstore.toml", ".fitstore.toml", "fitstore.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where state is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .store
            .validate()
            .with_context(|| format!("Invalid [store] section in {}", path))?;
        Ok(config)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for persisted state, relative to the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".fitstore".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LogConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Generate a default fitstore.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# FitStore configuration

[store]
name = "{name}"
currency = "INR"
# Shipping is free when the subtotal is above this amount
free_shipping_threshold = 999
shipping_fee = 50
# 1800 basis points = 18%
tax_rate_bps = 1800
low_stock_threshold = 20
low_stock_shown = 5
recent_orders = 5
featured_products = 6
related_products = 4
min_password_len = 6

[storage]
data_dir = ".fitstore"

[log]
# RUST_LOG overrides this; --verbose forces debug
level = "warn"
format = "text"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("Iron Den")).unwrap();
        assert_eq!(config.store.name, "Iron Den");
        assert_eq!(config.store.free_shipping_threshold, 999);
        assert_eq!(config.storage.data_dir, ".fitstore");
        assert!(!config.log.is_json());
    }

    #[test]
    fn test_missing_sections_default() {
        let config: CliConfig = toml::from_str("[store]\nshipping_fee = 75\n").unwrap();
        assert_eq!(config.store.shipping_fee, 75);
        assert_eq!(config.store.tax_rate_bps, 1800);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_json_and_validate() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("fitstore.json");
        std::fs::write(&good, r#"{"log": {"level": "debug", "format": "json"}}"#).unwrap();
        let config = CliConfig::load(good.to_str().unwrap()).unwrap();
        assert!(config.log.is_json());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[store]\ntax_rate_bps = 20000\n").unwrap();
        assert!(CliConfig::load(bad.to_str().unwrap()).is_err());
    }
}
