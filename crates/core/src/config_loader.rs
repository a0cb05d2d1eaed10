use crate::config::AppConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Json, Toml},
    Figment,
};
use std::path::Path;
use tracing::debug;

/// Default location of the TOML configuration.
pub const DEFAULT_CONFIG_PATH: &str = "config/Config.toml";

/// Environment variable prefix; nested keys are separated by `__`
/// (e.g. `GAMMABOT_SAXO__ACCESS_TOKEN`).
pub const ENV_PREFIX: &str = "GAMMABOT_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `config/Config.toml`, environment variables,
    /// and `config/Config.json`. Fields absent from every source keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// configuration is invalid.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Same as [`ConfigLoader::load`] with an explicit TOML path.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            exists = path.exists(),
            "Loading configuration"
        );
        let config: AppConfig = Self::figment(path)
            .extract()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;

        config.validate()?;
        debug!(
            tickers = config.strategy.tickers.len(),
            benchmark = %config.strategy.benchmark,
            base_url = %config.saxo.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        let json = path.with_extension("json");
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .join(Json::file(json))
    }
}
