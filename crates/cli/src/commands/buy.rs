use anyhow::{bail, Result};
use clap::Args;
use gammabot_core::Uic;

use crate::render;

#[derive(Args, Debug)]
pub struct BuyArgs {
    /// Config file path
    #[arg(short, long, env = "GAMMABOT_CONFIG", default_value = "config/Config.toml")]
    pub config: String,

    /// Option instrument UIC to buy one contract of
    #[arg(long)]
    pub uic: i64,
}

/// Submit a market day order for one contract of a known option.
pub async fn run_buy(args: BuyArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let client = super::connect(&config)?;

    let outcome = client.place_option_order(Uic(args.uic)).await;
    println!("{}", render::order_notice(&outcome));
    if !outcome.is_executed() {
        bail!("Order for UIC {} was not accepted", args.uic);
    }
    Ok(())
}
