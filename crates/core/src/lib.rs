pub mod config;
pub mod config_loader;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{AppConfig, SaxoConfig, StrategyConfig, DEFAULT_TICKERS, SAXO_LIVE_URL};
pub use config_loader::ConfigLoader;
pub use error::{FetchError, FetchResult};
pub use traits::BrokerGateway;
pub use types::{AssetType, Instrument, OptionQuote, OrderOutcome, PriceSeries, Signal, Uic};
