//! bby-price - Fast Best Buy price lookup CLI
//!
//! Prints the regular and current price of a single item by SKU.

use anyhow::{Context, Result};
use bby_price::commands::PriceCommand;
use bby_price::config::{Config, OutputFormat};
use bby_price::logging;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser)]
#[command(
    name = "bby-price",
    version,
    about = "Fast Best Buy price lookup CLI",
    long_about = "Looks up the regular and current price of a Best Buy item by SKU."
)]
struct Cli {
    /// SKU of the item to look up
    sku: String,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }

    // Initialize logging: stderr for the user, daily file for the record
    let stderr_filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    let log_file = logging::open_daily_log(&config.log_dir, Local::now().date_naive())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(stderr_filter),
        )
        .with(logging::file_layer(log_file))
        .init();

    let cmd = PriceCommand::new(config);
    let output = cmd.run(&cli.sku).await.context("Price lookup failed")?;
    println!("{}", output);

    Ok(())
}
