use crate::error::{FetchError, FetchResult};
use crate::types::{AssetType, Instrument, OptionQuote, OrderOutcome, PriceSeries, Uic};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Everything the screener needs from a brokerage.
///
/// Each call is a single request/response with no retries. Implementations
/// report failures as values; none of these methods panic.
#[async_trait]
pub trait BrokerGateway: Send + Sync {
    /// First instrument whose asset type and symbol both match exactly.
    async fn resolve_instrument(
        &self,
        symbol: &str,
        asset_type: AssetType,
    ) -> FetchResult<Instrument>;

    /// Last traded price of a stock.
    async fn current_price(&self, uic: Uic) -> FetchResult<f64>;

    /// Up to `count` daily closes, oldest first.
    async fn daily_closes(&self, uic: Uic, count: usize) -> FetchResult<PriceSeries>;

    /// Call option on `underlying` expiring on `expiry` with the strike
    /// nearest to `reference_price`.
    async fn find_call_option(
        &self,
        underlying: Uic,
        reference_price: f64,
        expiry: NaiveDate,
    ) -> FetchResult<OptionQuote>;

    /// Market day order to buy one contract of `option`.
    async fn place_order(&self, option: Uic) -> OrderOutcome;

    /// Exactly the last `n` daily closes.
    async fn recent_closes(&self, uic: Uic, n: usize) -> FetchResult<PriceSeries> {
        let series = self.daily_closes(uic, n).await?;
        series.last_n(n).ok_or(FetchError::InsufficientData {
            expected: n,
            actual: series.len(),
        })
    }
}
