//! Saxo OpenAPI REST client.
//!
//! One `reqwest::Client` per process, bearer-token authentication on every
//! request, and no retries: each call is a single request/response.

use crate::error::{Result, SaxoError};
use gammabot_core::{SaxoConfig, SAXO_LIVE_URL};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Saxo simulation (paper) gateway.
pub const SAXO_SIM_URL: &str = "https://gateway.saxobank.com/sim/openapi";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the Saxo client.
#[derive(Debug)]
pub struct SaxoClientConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,

    /// OpenAPI bearer token.
    pub access_token: SecretString,

    /// Account orders are booked against.
    pub account_key: String,

    /// Request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for SaxoClientConfig {
    fn default() -> Self {
        Self {
            base_url: SAXO_LIVE_URL.to_string(),
            access_token: SecretString::from(""),
            account_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl SaxoClientConfig {
    /// Configuration for the live gateway.
    #[must_use]
    pub fn live() -> Self {
        Self::default()
    }

    /// Configuration for the simulation gateway.
    #[must_use]
    pub fn sim() -> Self {
        Self {
            base_url: SAXO_SIM_URL.to_string(),
            ..Self::default()
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = SecretString::from(token.into());
        self
    }

    /// Sets the account key.
    #[must_use]
    pub fn with_account_key(mut self, key: impl Into<String>) -> Self {
        self.account_key = key.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl From<&SaxoConfig> for SaxoClientConfig {
    fn from(config: &SaxoConfig) -> Self {
        let mut client = Self::default()
            .with_base_url(config.base_url.clone())
            .with_access_token(config.access_token.clone())
            .with_account_key(config.account_key.clone());
        client.timeout_secs = config.timeout_secs;
        client
    }
}

// =============================================================================
// SaxoClient
// =============================================================================

/// Saxo OpenAPI client.
pub struct SaxoClient {
    config: SaxoClientConfig,
    http: Client,
}

impl std::fmt::Debug for SaxoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaxoClient")
            .field("base_url", &self.config.base_url)
            .field("account_key", &self.config.account_key)
            .finish_non_exhaustive()
    }
}

impl SaxoClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: SaxoClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| SaxoError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the account key orders are booked against.
    #[must_use]
    pub fn account_key(&self) -> &str {
        &self.config.account_key
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Authenticated GET; any 2xx status is accepted.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send_get(path, query).await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SaxoError::api(status.as_u16(), text));
        }
        Ok(response.json::<T>().await?)
    }

    /// Authenticated GET that only accepts exactly `expected`.
    pub(crate) async fn get_expecting<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        expected: StatusCode,
    ) -> Result<T> {
        let response = self.send_get(path, query).await?;
        let status = response.status();
        if status != expected {
            let text = response.text().await.unwrap_or_default();
            return Err(SaxoError::api(status.as_u16(), text));
        }
        Ok(response.json::<T>().await?)
    }

    async fn send_get(&self, path: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.config.access_token.expose_secret())
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        Ok(response)
    }

    /// Authenticated JSON POST; returns the status without judging it.
    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<StatusCode> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.config.access_token.expose_secret())
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response.status())
    }
}
