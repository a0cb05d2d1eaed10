use clap::{Parser, Subcommand};

mod commands;
mod render;

use commands::{BuyArgs, ConfigArgs, ScanArgs};

#[derive(Parser)]
#[command(name = "gammabot")]
#[command(about = "Weekly ATM call screener for high-beta momentum names on Saxo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the watch list for beta + momentum signals
    Scan(ScanArgs),
    /// Buy one contract of an option by UIC
    Buy(BuyArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the table and JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan(args) => commands::run_scan(args).await?,
        Commands::Buy(args) => commands::run_buy(args).await?,
        Commands::Config(args) => commands::run_config(args).await?,
    }

    Ok(())
}
