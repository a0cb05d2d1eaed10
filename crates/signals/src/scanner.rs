//! Watch-list scanner.
//!
//! Runs the full pipeline for each ticker, one at a time in list order.
//! A failure at any step excludes that ticker only; the scan always
//! completes. Why a ticker was excluded is logged at `debug` and, when
//! `explain_exclusions` is set, kept in the report.

use chrono::{DateTime, NaiveDate, Utc};
use gammabot_core::{AssetType, BrokerGateway, FetchError, Instrument, Signal, StrategyConfig};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::beta::estimate_beta;
use crate::expiry::this_week_friday;
use crate::filter::SignalThresholds;
use crate::momentum::momentum;

/// Scanner settings, normally derived from [`StrategyConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    pub tickers: Vec<String>,
    pub benchmark: String,
    pub thresholds: SignalThresholds,
    pub beta_lookback: usize,
    pub momentum_lookback: usize,
    pub explain_exclusions: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::from(&StrategyConfig::default())
    }
}

impl From<&StrategyConfig> for ScannerConfig {
    fn from(config: &StrategyConfig) -> Self {
        Self {
            tickers: config.tickers.clone(),
            benchmark: config.benchmark.clone(),
            thresholds: SignalThresholds::from(config),
            beta_lookback: config.beta_lookback,
            momentum_lookback: config.momentum_lookback,
            explain_exclusions: config.explain_exclusions,
        }
    }
}

/// The first step at which a ticker failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum ExclusionReason {
    BenchmarkUnresolved(FetchError),
    Unresolved(FetchError),
    BetaUnavailable(FetchError),
    BetaBelowThreshold(f64),
    PriceUnavailable(FetchError),
    ClosesUnavailable(FetchError),
    MomentumUnavailable(FetchError),
    MomentumBelowThreshold(f64),
    NoOption(FetchError),
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BenchmarkUnresolved(e) => write!(f, "benchmark unresolved ({e})"),
            Self::Unresolved(e) => write!(f, "instrument unresolved ({e})"),
            Self::BetaUnavailable(e) => write!(f, "beta unavailable ({e})"),
            Self::BetaBelowThreshold(beta) => write!(f, "beta {beta:.2} at or below threshold"),
            Self::PriceUnavailable(e) => write!(f, "price unavailable ({e})"),
            Self::ClosesUnavailable(e) => write!(f, "closes unavailable ({e})"),
            Self::MomentumUnavailable(e) => write!(f, "momentum unavailable ({e})"),
            Self::MomentumBelowThreshold(m) => {
                write!(f, "momentum {:.2}% at or below threshold", m * 100.0)
            }
            Self::NoOption(e) => write!(f, "no weekly call ({e})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exclusion {
    pub ticker: String,
    pub reason: ExclusionReason,
}

/// Outcome of one pass over the watch list.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub expiry: NaiveDate,
    pub scanned_at: DateTime<Utc>,
    /// In watch-list order.
    pub signals: Vec<Signal>,
    /// Empty unless `explain_exclusions` was set.
    pub exclusions: Vec<Exclusion>,
}

impl ScanReport {
    fn new(expiry: NaiveDate) -> Self {
        Self {
            expiry,
            scanned_at: Utc::now(),
            signals: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    /// Signal row for `ticker` (ASCII case-insensitive).
    pub fn find(&self, ticker: &str) -> Option<&Signal> {
        self.signals
            .iter()
            .find(|s| s.ticker.eq_ignore_ascii_case(ticker))
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

pub struct Scanner<G> {
    gateway: G,
    config: ScannerConfig,
}

impl<G: BrokerGateway> Scanner<G> {
    pub fn new(gateway: G, config: ScannerConfig) -> Self {
        Self { gateway, config }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scan the watch list, targeting the Friday of `today`'s week.
    pub async fn scan(&self, today: NaiveDate) -> ScanReport {
        let expiry = this_week_friday(today);
        info!(
            tickers = self.config.tickers.len(),
            benchmark = %self.config.benchmark,
            %expiry,
            "Starting scan"
        );

        let mut report = ScanReport::new(expiry);

        let benchmark = self
            .gateway
            .resolve_instrument(&self.config.benchmark, AssetType::Stock)
            .await;
        if let Err(e) = &benchmark {
            warn!(benchmark = %self.config.benchmark, error = %e, "Benchmark unresolved, no ticker can qualify");
        }

        for ticker in &self.config.tickers {
            let outcome = match &benchmark {
                Ok(bench) => self.evaluate(ticker, bench, expiry).await,
                Err(e) => Err(ExclusionReason::BenchmarkUnresolved(e.clone())),
            };

            match outcome {
                Ok(signal) => {
                    info!(
                        ticker = %signal.ticker,
                        beta = signal.beta,
                        momentum = signal.momentum,
                        option_uic = %signal.option.uic,
                        strike = %signal.option.strike,
                        "Signal"
                    );
                    report.signals.push(signal);
                }
                Err(reason) => {
                    debug!(ticker = %ticker, %reason, "Excluded");
                    if self.config.explain_exclusions {
                        report.exclusions.push(Exclusion {
                            ticker: ticker.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        info!(
            signals = report.signals.len(),
            scanned = self.config.tickers.len(),
            "Scan complete"
        );
        report
    }

    /// Run every screen for one ticker, stopping at the first failure.
    ///
    /// # Errors
    /// The [`ExclusionReason`] for the step that failed.
    pub async fn evaluate(
        &self,
        ticker: &str,
        benchmark: &Instrument,
        expiry: NaiveDate,
    ) -> Result<Signal, ExclusionReason> {
        let instrument = self
            .gateway
            .resolve_instrument(ticker, AssetType::Stock)
            .await
            .map_err(ExclusionReason::Unresolved)?;

        let beta = estimate_beta(
            &self.gateway,
            instrument.uic,
            benchmark.uic,
            self.config.beta_lookback,
        )
        .await
        .map_err(ExclusionReason::BetaUnavailable)?;
        if !self.config.thresholds.beta_passes(beta) {
            return Err(ExclusionReason::BetaBelowThreshold(beta));
        }

        let price = self.gateway.current_price(instrument.uic).await;
        let closes = self
            .gateway
            .recent_closes(instrument.uic, self.config.momentum_lookback)
            .await;
        let price = price.map_err(ExclusionReason::PriceUnavailable)?;
        let closes = closes.map_err(ExclusionReason::ClosesUnavailable)?;

        let change = momentum(price, &closes).map_err(ExclusionReason::MomentumUnavailable)?;
        if !self.config.thresholds.momentum_passes(change) {
            return Err(ExclusionReason::MomentumBelowThreshold(change));
        }

        let option = self
            .gateway
            .find_call_option(instrument.uic, price, expiry)
            .await
            .map_err(ExclusionReason::NoOption)?;

        Ok(Signal {
            ticker: ticker.to_string(),
            beta,
            momentum: change,
            option,
        })
    }
}
