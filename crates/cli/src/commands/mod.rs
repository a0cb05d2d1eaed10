//! Subcommand implementations.

pub mod buy;
pub mod config;
pub mod scan;

pub use buy::{run_buy, BuyArgs};
pub use config::{run_config, ConfigArgs};
pub use scan::{run_scan, ScanArgs};

use anyhow::{Context, Result};
use gammabot_core::{AppConfig, ConfigLoader};
use gammabot_saxo::{SaxoClient, SaxoClientConfig};

pub(crate) fn load_config(path: &str) -> Result<AppConfig> {
    ConfigLoader::load_from(path).with_context(|| format!("Failed to load config from {path}"))
}

pub(crate) fn connect(config: &AppConfig) -> Result<SaxoClient> {
    if config.saxo.access_token.trim().is_empty() {
        tracing::warn!("No Saxo access token configured; set GAMMABOT_SAXO__ACCESS_TOKEN");
    }
    SaxoClient::new(SaxoClientConfig::from(&config.saxo)).context("Failed to build Saxo client")
}
