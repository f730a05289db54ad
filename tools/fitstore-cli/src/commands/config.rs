//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::output::Output;

/// Run the config command.
pub fn run(args: ConfigArgs, config: &CliConfig, source: Option<&Path>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(config, source, output),
        ConfigCommand::Init { force } => init_config(force, output),
    }
}

fn show_config(config: &CliConfig, source: Option<&Path>, output: &Output) -> Result<()> {
    if output.is_json() {
        output.json(config);
        return Ok(());
    }

    output.header("Current Configuration");
    match source {
        Some(path) => output.kv("file", &path.display().to_string()),
        None => output.kv("file", "(defaults)"),
    }

    let store = &config.store;
    output.info("");
    output.info("[store]");
    output.kv("name", &store.name);
    output.kv("currency", store.currency.code());
    output.kv(
        "free_shipping_threshold",
        &store.free_shipping_threshold.to_string(),
    );
    output.kv("shipping_fee", &store.shipping_fee.to_string());
    output.kv("tax_rate_bps", &store.tax_rate_bps.to_string());
    output.kv("low_stock_threshold", &store.low_stock_threshold.to_string());
    output.kv("low_stock_shown", &store.low_stock_shown.to_string());
    output.kv("recent_orders", &store.recent_orders.to_string());
    output.kv("featured_products", &store.featured_products.to_string());
    output.kv("related_products", &store.related_products.to_string());
    output.kv("min_password_len", &store.min_password_len.to_string());

    output.info("");
    output.info("[storage]");
    output.kv("data_dir", &config.storage.data_dir);

    output.info("");
    output.info("[log]");
    output.kv("level", &config.log.level);
    output.kv("format", &config.log.format);

    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = cwd.join("fitstore.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config("FitStore");
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
