//! Signal pipeline for the GammaBot screener.
//!
//! Per ticker, in watch-list order:
//! 1. resolve the instrument
//! 2. estimate beta against the benchmark ([`beta`])
//! 3. compute momentum from the current price and the last two closes ([`momentum`])
//! 4. apply the strict thresholds ([`filter`])
//! 5. look up this week's ATM call ([`expiry`])
//!
//! [`scanner::Scanner`] runs the whole sequence and never lets one ticker's
//! failure abort the rest.

pub mod beta;
pub mod expiry;
pub mod filter;
pub mod momentum;
pub mod scanner;

pub use beta::{
    beta_from_closes, beta_from_returns, estimate_beta, population_covariance, population_variance,
};
pub use expiry::{this_week_friday, this_week_friday_local};
pub use filter::SignalThresholds;
pub use momentum::momentum;
pub use scanner::{Exclusion, ExclusionReason, ScanReport, Scanner, ScannerConfig};
