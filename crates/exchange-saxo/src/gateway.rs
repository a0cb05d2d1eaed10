use async_trait::async_trait;
use chrono::NaiveDate;
use gammabot_core::{
    AssetType, BrokerGateway, FetchResult, Instrument, OptionQuote, OrderOutcome, PriceSeries, Uic,
};

use crate::client::SaxoClient;

#[async_trait]
impl BrokerGateway for SaxoClient {
    async fn resolve_instrument(
        &self,
        symbol: &str,
        asset_type: AssetType,
    ) -> FetchResult<Instrument> {
        Ok(self.lookup_instrument(symbol, asset_type).await?)
    }

    async fn current_price(&self, uic: Uic) -> FetchResult<f64> {
        Ok(self.last_traded_price(uic).await?)
    }

    async fn daily_closes(&self, uic: Uic, count: usize) -> FetchResult<PriceSeries> {
        Ok(SaxoClient::daily_closes(self, uic, count).await?)
    }

    async fn find_call_option(
        &self,
        underlying: Uic,
        reference_price: f64,
        expiry: NaiveDate,
    ) -> FetchResult<OptionQuote> {
        Ok(SaxoClient::find_call_option(self, underlying, reference_price, expiry).await?)
    }

    async fn place_order(&self, option: Uic) -> OrderOutcome {
        self.place_option_order(option).await
    }
}
