//! xVA CLI - command line operations for the exposure engine.
//!
//! # Commands
//!
//! - `xva discva` - value an uncollateralised forward from the xVA desk
//!   and front-office views and compute the discounting adjustment
//! - `xva nonlinearity` - compute standalone and portfolio CVAs for an
//!   opposing pair of forwards and report the netting benefit
//!
//! Scenario parameters come from an optional TOML file (see
//! [`config::ScenarioConfig`]); a handful of flags override the file.
//! Exposure profiles (EPE/ENE/PFE) can be exported as CSV for external
//! plotting.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::ScenarioConfig;

/// xVA exposure engine CLI
#[derive(Parser)]
#[command(name = "xva")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario configuration file (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    /// Directory for CSV exposure-profile exports
    #[arg(short, long, global = true)]
    export_dir: Option<String>,

    /// Override the number of Monte Carlo paths
    #[arg(short = 'p', long, global = true)]
    paths: Option<usize>,

    /// Override the RNG seed
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discounting valuation adjustment of an uncollateralised forward
    Discva,

    /// CVA non-linearity of an opposing forward pair
    Nonlinearity,
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut scenario = match &cli.config {
        Some(path) => ScenarioConfig::load(std::path::Path::new(path))?,
        None => ScenarioConfig::default(),
    };
    if let Some(paths) = cli.paths {
        scenario.number_of_paths = paths;
    }
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }

    if cli.verbose {
        info!("Scenario: {:?}", scenario);
    }

    match cli.command {
        Commands::Discva => {
            commands::discva::run(&scenario, &cli.format, cli.export_dir.as_deref())?
        }
        Commands::Nonlinearity => {
            commands::nonlinearity::run(&scenario, &cli.format, cli.export_dir.as_deref())?
        }
    }
    Ok(())
}
