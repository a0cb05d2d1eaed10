use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Saxo Bank OpenAPI live gateway.
pub const SAXO_LIVE_URL: &str = "https://gateway.saxobank.com/api/openapi";

/// US names with weekly option expiries.
pub const DEFAULT_TICKERS: [&str; 20] = [
    "TSLA", "NVDA", "AMD", "META", "AMZN", "AAPL", "GOOGL", "MSFT", "NFLX", "PYPL", "INTC",
    "CSCO", "QCOM", "ZM", "DOCU", "SNAP", "ROKU", "SPOT", "UBER", "LYFT",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub saxo: SaxoConfig,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SaxoConfig {
    pub base_url: String,
    pub access_token: String,
    pub account_key: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Watch list, scanned in this order.
    pub tickers: Vec<String>,
    pub benchmark: String,
    /// Beta must be strictly greater than this.
    pub beta_threshold: f64,
    /// Fractional momentum must be strictly greater than this (0.01 = 1%).
    pub momentum_threshold: f64,
    /// Daily closes used for beta.
    pub beta_lookback: usize,
    /// Daily closes used for momentum.
    pub momentum_lookback: usize,
    /// Record why each excluded ticker was dropped.
    pub explain_exclusions: bool,
}

impl Default for SaxoConfig {
    fn default() -> Self {
        Self {
            base_url: SAXO_LIVE_URL.to_string(),
            access_token: String::new(),
            account_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            tickers: DEFAULT_TICKERS.iter().map(|t| (*t).to_string()).collect(),
            benchmark: "SPY".to_string(),
            beta_threshold: 1.5,
            momentum_threshold: 0.01,
            beta_lookback: 60,
            momentum_lookback: 2,
            explain_exclusions: false,
        }
    }
}

impl AppConfig {
    /// Rejects settings the scanner cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.saxo.base_url.trim().is_empty() {
            bail!("saxo.base_url must not be empty");
        }
        if self.strategy.tickers.is_empty() {
            bail!("strategy.tickers must list at least one symbol");
        }
        if self.strategy.benchmark.trim().is_empty() {
            bail!("strategy.benchmark must not be empty");
        }
        if self.strategy.beta_lookback < 2 {
            bail!(
                "strategy.beta_lookback must be at least 2, got {}",
                self.strategy.beta_lookback
            );
        }
        if self.strategy.momentum_lookback < 2 {
            bail!(
                "strategy.momentum_lookback must be at least 2, got {}",
                self.strategy.momentum_lookback
            );
        }
        Ok(())
    }

    /// Copy safe to print: secrets replaced with a fixed marker.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.saxo.access_token.is_empty() {
            copy.saxo.access_token = "[REDACTED]".to_string();
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_watch_list() {
        let config = AppConfig::default();
        assert_eq!(config.saxo.base_url, SAXO_LIVE_URL);
        assert_eq!(config.strategy.tickers.len(), 20);
        assert_eq!(config.strategy.tickers[0], "TSLA");
        assert_eq!(config.strategy.benchmark, "SPY");
        assert_eq!(config.strategy.beta_threshold, 1.5);
        assert_eq!(config.strategy.momentum_threshold, 0.01);
        assert_eq!(config.strategy.beta_lookback, 60);
        assert_eq!(config.strategy.momentum_lookback, 2);
        assert!(!config.strategy.explain_exclusions);
        assert!(config.saxo.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_watch_list() {
        let mut config = AppConfig::default();
        config.strategy.tickers.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_lookback() {
        let mut config = AppConfig::default();
        config.strategy.momentum_lookback = 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("momentum_lookback"));
    }

    #[test]
    fn test_redacted_hides_token() {
        let mut config = AppConfig::default();
        config.saxo.access_token = "eyJhbGciOi".to_string();
        let redacted = config.redacted();
        assert_eq!(redacted.saxo.access_token, "[REDACTED]");
        assert_eq!(config.saxo.access_token, "eyJhbGciOi");
    }

    #[test]
    fn test_partial_toml_section_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"strategy": {"benchmark": "QQQ"}}"#).unwrap();
        assert_eq!(config.strategy.benchmark, "QQQ");
        assert_eq!(config.strategy.tickers.len(), 20);
        assert_eq!(config.saxo.base_url, SAXO_LIVE_URL);
    }
}
