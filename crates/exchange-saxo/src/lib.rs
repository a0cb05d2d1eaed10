//! Saxo Bank OpenAPI integration for the GammaBot screener.
//!
//! Provides a bearer-token authenticated REST client covering the five
//! endpoints the screener needs:
//!
//! - `GET /ref/v1/lookup` - resolve a ticker to a UIC
//! - `GET /trade/v1/infoprices` - last traded price
//! - `GET /chart/v1/charts` - daily closes
//! - `GET /ref/v1/instruments` - option lookup by underlying, strike, expiry
//! - `POST /trade/v2/orders` - market day order
//!
//! [`SaxoClient`] implements [`gammabot_core::BrokerGateway`], which is how
//! the scanner talks to it.
//!
//! # Example
//!
//! ```ignore
//! use gammabot_core::AssetType;
//! use gammabot_saxo::{SaxoClient, SaxoClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SaxoClient::new(
//!         SaxoClientConfig::live()
//!             .with_access_token(std::env::var("SAXO_TOKEN")?)
//!             .with_account_key("my-account-key"),
//!     )?;
//!
//!     let spy = client.lookup_instrument("SPY", AssetType::Stock).await?;
//!     let closes = client.daily_closes(spy.uic, 60).await?;
//!     println!("{} closes for {}", closes.len(), spy.symbol);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod execution;
pub mod gateway;
pub mod instruments;
pub mod market_data;
pub mod options_chain;
pub mod types;

pub use client::{SaxoClient, SaxoClientConfig};
pub use error::{Result, SaxoError};
pub use execution::OrderRequest;
pub use options_chain::parse_expiry_date;
