//! Market data: last traded price and daily closes for underlyings.

use gammabot_core::{AssetType, PriceSeries, Uic};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::SaxoClient;
use crate::error::{Result, SaxoError};
use crate::types::{ChartResponse, InfoPriceResponse};

impl SaxoClient {
    /// Last traded price of a stock. Only an HTTP 200 is accepted.
    ///
    /// # Errors
    /// `Api` on any other status, `NotFound` when the price is absent.
    pub async fn last_traded_price(&self, uic: Uic) -> Result<f64> {
        debug!(%uic, "Fetching last traded price");

        let query = [
            ("AssetType", AssetType::Stock.to_string()),
            ("Uic", uic.to_string()),
        ];
        let response: InfoPriceResponse = self
            .get_expecting("/trade/v1/infoprices", &query, StatusCode::OK)
            .await?;

        response
            .last_traded
            .and_then(|lt| lt.price)
            .ok_or_else(|| SaxoError::not_found(format!("last traded price for {uic}")))
    }

    /// Up to `count` daily closes, oldest first.
    ///
    /// Points without a `Close` are dropped, so the series may be shorter
    /// than requested.
    pub async fn daily_closes(&self, uic: Uic, count: usize) -> Result<PriceSeries> {
        debug!(%uic, count, "Fetching daily closes");

        let query = [
            ("Uic", uic.to_string()),
            ("AssetType", AssetType::Stock.to_string()),
            ("FieldGroups", "Data".to_string()),
            ("Interval", "OneDay".to_string()),
            ("Count", count.to_string()),
        ];
        let response: ChartResponse = self.get("/chart/v1/charts", &query).await?;

        Ok(PriceSeries::new(response.closes()))
    }
}
