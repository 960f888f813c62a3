//! batch-pricer - Turns a pasted price list into a sectioned catalog with resale tiers.

use anyhow::Result;
use batch_pricer::catalog::{Currency, ExchangeRate};
use batch_pricer::commands::{ProcessCommand, QuoteCommand};
use batch_pricer::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "batch-pricer",
    version,
    about = "Turns a pasted price list into a sectioned catalog with resale price tiers",
    long_about = "Reads a free-form product list grouped under section headers, prices every \
                  line from its trailing amount and prints cost, cash, card, installment and \
                  special-plan tiers in guaraníes."
)]
struct Cli {
    /// Exchange rate in guaraníes per dollar
    #[arg(short, long, global = true, env = "PRICER_RATE")]
    rate: Option<ExchangeRate>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, markdown, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Do not list lines that could not be priced
    #[arg(long, global = true)]
    hide_failed: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a whole list
    #[command(alias = "p")]
    Process {
        /// File with the list (stdin if omitted or "-")
        file: Option<PathBuf>,
    },

    /// Show the price tiers for a single amount
    #[command(alias = "q")]
    Quote {
        /// Price as an integer, without separators
        amount: u64,

        /// Currency of the amount (usd, gs); guessed from the amount if omitted
        #[arg(long)]
        currency: Option<Currency>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(rate) = cli.rate {
        config.exchange_rate = Some(rate.value());
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.hide_failed {
        config.show_failed = false;
    }

    let output = match cli.command {
        Commands::Process { file } => ProcessCommand::new(config).execute(file.as_deref())?,
        Commands::Quote { amount, currency } => {
            QuoteCommand::new(config).execute(amount, currency)?
        }
    };

    println!("{}", output);

    Ok(())
}
