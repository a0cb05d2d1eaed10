//! Terminal output for scan reports and order outcomes.

use std::fmt::Write;

use chrono::{DateTime, Local};
use gammabot_core::{OrderOutcome, Signal, StrategyConfig};
use gammabot_signals::ScanReport;
use serde::Serialize;

const RULE_WIDTH: usize = 78;

pub fn banner(strategy: &StrategyConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "GammaBot - Saxo weekly calls");
    let _ = writeln!(out, "Rules:");
    let _ = writeln!(out, "  - Weekly ATM calls");
    let _ = writeln!(
        out,
        "  - Beta > {} vs {}",
        trimmed(strategy.beta_threshold),
        strategy.benchmark
    );
    let _ = writeln!(
        out,
        "  - Momentum > {}%",
        trimmed(strategy.momentum_threshold * 100.0)
    );
    out
}

/// Two decimals at most, without trailing zeros ("7", "1.5", "0.25").
fn trimmed(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a ScanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<&'a OrderOutcome>,
}

/// The scan report as JSON, with the order outcome when one was placed.
pub fn json_report(report: &ScanReport, order: Option<&OrderOutcome>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput { report, order })
}

pub fn signal_table(signals: &[Signal]) -> String {
    let mut out = String::new();
    if signals.is_empty() {
        let _ = writeln!(out, "No valid signals found.");
        return out;
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{:<8} {:>6} {:>10} {:>10} {:>10} {:>12} {:>14}",
        "Ticker", "Beta", "Momentum", "Strike", "Premium", "Expiry", "Uic"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for signal in signals {
        let _ = writeln!(
            out,
            "{:<8} {:>6} {:>10} {:>10} {:>10} {:>12} {:>14}",
            signal.ticker,
            signal.display_beta(),
            signal.display_momentum(),
            signal.option.strike.to_string(),
            signal.display_premium(),
            signal.option.expiry.format("%Y-%m-%d").to_string(),
            signal.option.uic.to_string(),
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out
}

/// Exclusion diagnostics, one line per ticker.
pub fn exclusions(report: &ScanReport) -> String {
    let mut out = String::new();
    if report.exclusions.is_empty() {
        return out;
    }
    let _ = writeln!(out, "\nExcluded:");
    for exclusion in &report.exclusions {
        let _ = writeln!(out, "  {:<8} {}", exclusion.ticker, exclusion.reason);
    }
    out
}

pub fn updated(now: DateTime<Local>) -> String {
    format!("Updated: {}", now.format("%Y-%m-%d %H:%M:%S"))
}

pub fn order_notice(outcome: &OrderOutcome) -> &'static str {
    match outcome {
        OrderOutcome::Executed => "Order executed!",
        OrderOutcome::Failed(_) => "Order failed",
    }
}
