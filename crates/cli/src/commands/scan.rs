use anyhow::{bail, Result};
use chrono::Local;
use clap::Args;
use gammabot_signals::{Scanner, ScannerConfig};

use crate::render;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Config file path
    #[arg(short, long, env = "GAMMABOT_CONFIG", default_value = "config/Config.toml")]
    pub config: String,

    /// Emit the scan report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Record and print why each excluded ticker was dropped
    #[arg(long)]
    pub explain: bool,

    /// Buy the weekly call of this ticker if it qualifies
    #[arg(long, value_name = "TICKER")]
    pub buy: Option<String>,
}

/// Scan the watch list and optionally buy one of the matches.
pub async fn run_scan(args: ScanArgs) -> Result<()> {
    let mut config = super::load_config(&args.config)?;
    if args.explain {
        config.strategy.explain_exclusions = true;
    }
    let client = super::connect(&config)?;

    let scanner = Scanner::new(client, ScannerConfig::from(&config.strategy));
    let report = scanner.scan(Local::now().date_naive()).await;

    let order = match args.buy.as_deref() {
        Some(ticker) => {
            let Some(signal) = report.find(ticker) else {
                bail!("{ticker} has no signal in this scan");
            };
            tracing::info!(ticker = %signal.ticker, option_uic = %signal.option.uic, "Buying weekly call");
            Some(scanner.gateway().place_option_order(signal.option.uic).await)
        }
        None => None,
    };

    // stdout stays a single JSON document in --json mode
    if args.json {
        println!("{}", render::json_report(&report, order.as_ref())?);
        return Ok(());
    }

    print!("{}", render::banner(&config.strategy));
    println!();
    print!("{}", render::signal_table(&report.signals));
    print!("{}", render::exclusions(&report));
    if let Some(outcome) = &order {
        println!("{}", render::order_notice(outcome));
    }
    println!("\n{}", render::updated(Local::now()));
    Ok(())
}
