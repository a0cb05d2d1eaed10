//! Wire types for the Saxo OpenAPI endpoints the screener reads and writes.
//!
//! Only the fields the screener depends on are modelled. Everything is
//! optional on the read side so a partially populated record can be
//! skipped instead of failing the whole response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// ref/v1/lookup
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupResponse {
    #[serde(default)]
    pub data: Vec<LookupEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupEntry {
    pub asset_type: Option<String>,
    pub symbol: Option<String>,
    pub uic: Option<i64>,
}

// =============================================================================
// trade/v1/infoprices
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfoPriceResponse {
    pub last_traded: Option<LastTraded>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LastTraded {
    pub price: Option<f64>,
}

// =============================================================================
// chart/v1/charts
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartResponse {
    pub data: Option<ChartData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChartData {
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataPoint {
    pub close: Option<f64>,
}

impl ChartResponse {
    /// Closes in response order, skipping points without one.
    pub fn closes(&self) -> Vec<f64> {
        self.data
            .as_ref()
            .map(|d| d.data_points.iter().filter_map(|p| p.close).collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// ref/v1/instruments
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstrumentsResponse {
    #[serde(default)]
    pub data: Vec<RawOptionInstrument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOptionInstrument {
    pub uic: Option<i64>,
    pub strike_price: Option<Decimal>,
    pub expiry_date: Option<String>,
    pub last_traded: Option<RawLastTradedPremium>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawLastTradedPremium {
    pub price: Option<Decimal>,
}

// =============================================================================
// trade/v2/orders
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDuration {
    pub duration_type: String,
}

impl OrderDuration {
    /// Expires at the end of the trading day if unfilled.
    pub fn day_order() -> Self {
        Self {
            duration_type: "DayOrder".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lookup_response_parsing() {
        let body = serde_json::json!({
            "Data": [
                { "AssetType": "Stock", "Symbol": "TSLA", "Uic": 211 },
                { "AssetType": "CfdOnStock", "Symbol": "TSLA" }
            ]
        });
        let parsed: LookupResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].uic, Some(211));
        assert_eq!(parsed.data[1].uic, None);
    }

    #[test]
    fn test_lookup_response_without_data() {
        let parsed: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn test_chart_closes_skip_missing() {
        let body = serde_json::json!({
            "Data": { "DataPoints": [ { "Close": 100.0 }, { "Open": 101.0 }, { "Close": 105.5 } ] }
        });
        let parsed: ChartResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.closes(), vec![100.0, 105.5]);
    }

    #[test]
    fn test_chart_closes_without_data() {
        let parsed: ChartResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.closes().is_empty());
    }

    #[test]
    fn test_option_instrument_parsing() {
        let body = serde_json::json!({
            "Data": [{
                "Uic": 9001,
                "StrikePrice": 140.5,
                "ExpiryDate": "2026-10-16T00:00:00Z",
                "LastTraded": { "Price": 2.35 }
            }]
        });
        let parsed: InstrumentsResponse = serde_json::from_value(body).unwrap();
        let first = &parsed.data[0];
        assert_eq!(first.uic, Some(9001));
        assert_eq!(first.strike_price, Some(dec!(140.5)));
        assert_eq!(
            first.last_traded.as_ref().and_then(|l| l.price),
            Some(dec!(2.35))
        );
    }

    #[test]
    fn test_day_order_duration() {
        let json = serde_json::to_value(OrderDuration::day_order()).unwrap();
        assert_eq!(json, serde_json::json!({ "DurationType": "DayOrder" }));
    }
}
