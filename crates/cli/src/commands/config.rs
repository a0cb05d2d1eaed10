use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config file path
    #[arg(short, long, env = "GAMMABOT_CONFIG", default_value = "config/Config.toml")]
    pub config: String,
}

/// Print the effective configuration with the access token redacted.
pub async fn run_config(args: ConfigArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}
