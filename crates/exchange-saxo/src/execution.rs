//! Order execution: market day orders for option contracts.

use gammabot_core::{AssetType, OrderOutcome, Uic};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{info, warn};

use crate::client::SaxoClient;
use crate::error::{Result, SaxoError};
use crate::types::OrderDuration;

/// Body of `POST /trade/v2/orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRequest {
    pub account_key: String,
    pub uic: Uic,
    pub asset_type: AssetType,
    pub amount: u32,
    pub buy_sell: String,
    pub order_type: String,
    pub order_duration: OrderDuration,
}

impl OrderRequest {
    /// Market day order to buy one contract of `option`.
    pub fn market_buy(account_key: impl Into<String>, option: Uic) -> Self {
        Self {
            account_key: account_key.into(),
            uic: option,
            asset_type: AssetType::Option,
            amount: 1,
            buy_sell: "Buy".to_string(),
            order_type: "Market".to_string(),
            order_duration: OrderDuration::day_order(),
        }
    }
}

impl SaxoClient {
    /// Submit an order. Only HTTP 201 counts as accepted.
    ///
    /// # Errors
    /// `Api` with the received status otherwise; transport failures as-is.
    pub async fn submit_order(&self, order: &OrderRequest) -> Result<()> {
        info!(
            uic = %order.uic,
            asset_type = %order.asset_type,
            amount = order.amount,
            side = %order.buy_sell,
            "Submitting order"
        );

        let status = self.post_json("/trade/v2/orders", order).await?;
        if status != StatusCode::CREATED {
            return Err(SaxoError::api(status.as_u16(), "order not accepted"));
        }
        Ok(())
    }

    /// Buy one contract of `option` at market, reporting the outcome as a value.
    pub async fn place_option_order(&self, option: Uic) -> OrderOutcome {
        let order = OrderRequest::market_buy(self.account_key(), option);
        match self.submit_order(&order).await {
            Ok(()) => {
                info!(uic = %option, "Order accepted");
                OrderOutcome::Executed
            }
            Err(e) => {
                warn!(uic = %option, error = %e, "Order failed");
                OrderOutcome::Failed(e.to_string())
            }
        }
    }
}
