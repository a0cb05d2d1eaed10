//! Instrument lookup: ticker symbol to UIC.

use gammabot_core::{AssetType, Instrument, Uic};
use tracing::debug;

use crate::client::SaxoClient;
use crate::error::{Result, SaxoError};
use crate::types::{LookupEntry, LookupResponse};

/// First entry whose asset type and symbol both match exactly.
///
/// Entries missing any of the three fields are skipped.
pub fn select_match(entries: &[LookupEntry], symbol: &str, asset_type: AssetType) -> Option<Instrument> {
    entries.iter().find_map(|entry| {
        let matches = entry.asset_type.as_deref() == Some(asset_type.as_str())
            && entry.symbol.as_deref() == Some(symbol);
        match (matches, entry.uic) {
            (true, Some(uic)) => Some(Instrument {
                uic: Uic(uic),
                symbol: symbol.to_string(),
            }),
            _ => None,
        }
    })
}

impl SaxoClient {
    /// Resolve a ticker via `GET /ref/v1/lookup?Keyword=…`.
    ///
    /// # Errors
    /// `NotFound` when no entry matches; transport and decode failures as-is.
    pub async fn lookup_instrument(&self, symbol: &str, asset_type: AssetType) -> Result<Instrument> {
        debug!(symbol, asset_type = %asset_type, "Looking up instrument");

        let response: LookupResponse = self
            .get("/ref/v1/lookup", &[("Keyword", symbol.to_string())])
            .await?;

        select_match(&response.data, symbol, asset_type)
            .ok_or_else(|| SaxoError::not_found(format!("{asset_type} {symbol}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(asset_type: &str, symbol: &str, uic: Option<i64>) -> LookupEntry {
        LookupEntry {
            asset_type: Some(asset_type.to_string()),
            symbol: Some(symbol.to_string()),
            uic,
        }
    }

    #[test]
    fn test_select_exact_match() {
        let entries = vec![
            entry("CfdOnStock", "NVDA", Some(1)),
            entry("Stock", "NVDA", Some(2)),
            entry("Stock", "NVDA", Some(3)),
        ];
        let found = select_match(&entries, "NVDA", AssetType::Stock).unwrap();
        assert_eq!(found.uic, Uic(2));
        assert_eq!(found.symbol, "NVDA");
    }

    #[test]
    fn test_select_requires_exact_symbol() {
        let entries = vec![entry("Stock", "NVDA:xnas", Some(2)), entry("Stock", "nvda", Some(3))];
        assert!(select_match(&entries, "NVDA", AssetType::Stock).is_none());
    }

    #[test]
    fn test_select_skips_entries_without_uic() {
        let entries = vec![entry("Stock", "AMD", None), entry("Stock", "AMD", Some(7))];
        assert_eq!(
            select_match(&entries, "AMD", AssetType::Stock).map(|i| i.uic),
            Some(Uic(7))
        );
    }

    #[test]
    fn test_select_empty() {
        assert!(select_match(&[], "AMD", AssetType::Stock).is_none());
    }
}
