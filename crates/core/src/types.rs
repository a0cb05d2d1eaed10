//! Domain types shared by the broker client, the scanner, and the CLI.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Broker-specific unique instrument identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uic(pub i64);

impl std::fmt::Display for Uic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Uic {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Asset classes the screener touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Stock,
    Option,
}

impl AssetType {
    /// Wire name used by the broker API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Option => "Option",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved tradable instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub uic: Uic,
    pub symbol: String,
}

/// Daily closing prices, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(closes: Vec<f64>) -> Self {
        Self { closes }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Oldest close in the series.
    pub fn first(&self) -> Option<f64> {
        self.closes.first().copied()
    }

    /// The most recent `n` closes, or `None` when fewer are available.
    pub fn last_n(&self, n: usize) -> Option<PriceSeries> {
        if self.closes.len() < n {
            return None;
        }
        Some(Self::new(self.closes[self.closes.len() - n..].to_vec()))
    }

    /// Simple daily returns: `(c[i] - c[i-1]) / c[i-1]`.
    ///
    /// One element shorter than the series; empty for fewer than two closes.
    pub fn returns(&self) -> Vec<f64> {
        self.closes
            .windows(2)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect()
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(closes: Vec<f64>) -> Self {
        Self::new(closes)
    }
}

/// A listed call option matched to a qualifying underlying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Option instrument identifier (what gets ordered).
    pub uic: Uic,
    pub strike: Decimal,
    /// Last traded premium, when the broker reports one.
    pub premium: Option<Decimal>,
    pub expiry: NaiveDate,
}

/// A ticker that passed every screen, with the option to trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub ticker: String,
    pub beta: f64,
    /// Fractional change, e.g. `0.07` for 7%.
    pub momentum: f64,
    pub option: OptionQuote,
}

impl Signal {
    /// Beta rounded to two decimals for display.
    pub fn display_beta(&self) -> String {
        format!("{:.2}", self.beta)
    }

    /// Momentum as a percentage with two decimals (e.g. "7.00%").
    pub fn display_momentum(&self) -> String {
        format!("{:.2}%", self.momentum * 100.0)
    }

    pub fn display_premium(&self) -> String {
        self.option
            .premium
            .map_or_else(|| "N/A".to_string(), |p| p.to_string())
    }
}

/// Result of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    Executed,
    Failed(String),
}

impl OrderOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, Self::Executed)
    }
}
