//! Option lookup: nearest-strike call for an underlying and expiry.

use chrono::{DateTime, NaiveDate};
use gammabot_core::{AssetType, OptionQuote, Uic};
use tracing::debug;

use crate::client::SaxoClient;
use crate::error::{Result, SaxoError};
use crate::types::{InstrumentsResponse, RawOptionInstrument};

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
        .or_else(|| {
            // Saxo also emits naive timestamps such as "2026-10-16T00:00:00".
            raw.get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        })
}

impl TryFrom<RawOptionInstrument> for OptionQuote {
    type Error = SaxoError;

    fn try_from(raw: RawOptionInstrument) -> Result<Self> {
        let uic = raw
            .uic
            .ok_or_else(|| SaxoError::Serialization("option without Uic".to_string()))?;
        let strike = raw
            .strike_price
            .ok_or_else(|| SaxoError::Serialization("option without StrikePrice".to_string()))?;
        let expiry = raw
            .expiry_date
            .as_deref()
            .and_then(parse_expiry_date)
            .ok_or_else(|| SaxoError::Serialization("option without a valid ExpiryDate".to_string()))?;

        Ok(Self {
            uic: Uic(uic),
            strike,
            premium: raw.last_traded.and_then(|lt| lt.price),
            expiry,
        })
    }
}

impl SaxoClient {
    /// First call listed for `underlying` on `expiry` with the strike nearest
    /// `reference_price`.
    ///
    /// # Errors
    /// `NotFound` on an empty result; `Serialization` if the first entry lacks
    /// a required field.
    pub async fn find_call_option(
        &self,
        underlying: Uic,
        reference_price: f64,
        expiry: NaiveDate,
    ) -> Result<OptionQuote> {
        debug!(%underlying, reference_price, %expiry, "Looking up weekly ATM call");

        let query = [
            ("AssetType", AssetType::Option.to_string()),
            ("UnderlyingUic", underlying.to_string()),
            ("OptionType", "Call".to_string()),
            ("StrikePriceNear", reference_price.to_string()),
            ("ExpiryDate", expiry.format("%Y-%m-%d").to_string()),
        ];
        let response: InstrumentsResponse = self.get("/ref/v1/instruments", &query).await?;

        let first = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| SaxoError::not_found(format!("call on {underlying} expiring {expiry}")))?;

        OptionQuote::try_from(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawLastTradedPremium;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_expiry_formats() {
        assert_eq!(parse_expiry_date("2026-10-16"), Some(date(2026, 10, 16)));
        assert_eq!(parse_expiry_date("2026-10-16T00:00:00Z"), Some(date(2026, 10, 16)));
        assert_eq!(parse_expiry_date("2026-10-16T00:00:00"), Some(date(2026, 10, 16)));
        assert_eq!(parse_expiry_date("16/10/2026"), None);
        assert_eq!(parse_expiry_date(""), None);
    }

    #[test]
    fn test_raw_option_conversion() {
        let raw = RawOptionInstrument {
            uic: Some(9001),
            strike_price: Some(dec!(140)),
            expiry_date: Some("2026-10-16".to_string()),
            last_traded: Some(RawLastTradedPremium {
                price: Some(dec!(2.35)),
            }),
        };
        let quote = OptionQuote::try_from(raw).unwrap();
        assert_eq!(quote.uic, Uic(9001));
        assert_eq!(quote.strike, dec!(140));
        assert_eq!(quote.premium, Some(dec!(2.35)));
        assert_eq!(quote.expiry, date(2026, 10, 16));
    }

    #[test]
    fn test_raw_option_without_premium() {
        let raw = RawOptionInstrument {
            uic: Some(9001),
            strike_price: Some(dec!(140)),
            expiry_date: Some("2026-10-16".to_string()),
            last_traded: None,
        };
        assert_eq!(OptionQuote::try_from(raw).unwrap().premium, None);
    }

    #[test]
    fn test_raw_option_missing_strike() {
        let raw = RawOptionInstrument {
            uic: Some(9001),
            strike_price: None,
            expiry_date: Some("2026-10-16".to_string()),
            last_traded: None,
        };
        assert!(matches!(
            OptionQuote::try_from(raw),
            Err(SaxoError::Serialization(_))
        ));
    }
}
