//! Option Pricer CLI - batch pricing of European options
//!
//! Reads a JSON array of option records, prices every valid record under
//! Black-Scholes and appends the results to per-maturity CSV tables.
//!
//! # Commands
//!
//! - `option-pricer price [--input FILE] [--reports-dir DIR] [--valuation-date DATE] [--no-write]`
//! - `option-pricer validate [--input FILE] [--valuation-date DATE]`
//!
//! # Configuration
//!
//! Settings come from, in increasing priority: built-in defaults, the TOML
//! file given by `--config`, `PRICER_*` environment variables, and the
//! command-line flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod ingest;
mod report;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Black-Scholes batch option pricer
#[derive(Parser)]
#[command(name = "option-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price every valid record and append results to the report tables
    Price {
        /// Path to the JSON records file
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory for prices_<maturity>.csv tables
        #[arg(short, long, value_name = "DIR")]
        reports_dir: Option<PathBuf>,

        /// Valuation date (YYYY-MM-DD), today if omitted
        #[arg(short = 'd', long)]
        valuation_date: Option<String>,

        /// Print prices without writing report tables
        #[arg(long)]
        no_write: bool,
    },

    /// Validate records without pricing them
    Validate {
        /// Path to the JSON records file
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Valuation date (YYYY-MM-DD), today if omitted
        #[arg(short = 'd', long)]
        valuation_date: Option<String>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut args = CliArgs {
        config_file: cli.config,
        verbose: cli.verbose,
        ..Default::default()
    };
    match &cli.command {
        Commands::Price {
            input,
            reports_dir,
            valuation_date,
            ..
        } => {
            args.input = input.clone();
            args.reports_dir = reports_dir.clone();
            args.valuation_date = valuation_date.clone();
        }
        Commands::Validate {
            input,
            valuation_date,
        } => {
            args.input = input.clone();
            args.valuation_date = valuation_date.clone();
        }
    }

    let config = build_config(&args)?;
    init_tracing(config.log_level.as_filter_str());
    info!(
        input = %config.input.display(),
        reports_dir = %config.reports_dir.display(),
        log_level = %config.log_level,
        parallel = config.parallel,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Price { no_write, .. } => commands::price::run(&config, !no_write).map(|_| ()),
        Commands::Validate { .. } => commands::validate::run(&config).map(|_| ()),
    }
}
