use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Days Forward Coverage toolkit.
#[derive(Parser)]
#[command(
    name = "dfc",
    version,
    about = "Days Forward Coverage: how many days of forecasted demand current stock covers"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate synthetic forecast and inventory datasets.
    Generate(GenerateArgs),
    /// Compute days forward coverage for every product.
    Coverage(CoverageArgs),
    /// Trace coverage over time for a single product.
    Timeline(TimelineArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dfc.toml")]
    pub config: PathBuf,

    /// Override the data directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Override the RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `coverage` subcommand.
#[derive(clap::Args)]
pub struct CoverageArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dfc.toml")]
    pub config: PathBuf,

    /// Override the forecast CSV path from config.
    #[arg(long)]
    pub forecast: Option<PathBuf>,

    /// Override the inventory CSV path from config.
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Override the coverage output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to the earliest forecast date.
    #[arg(short, long)]
    pub reference_date: Option<NaiveDate>,

    /// Run per-product simulations on a single thread.
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the `timeline` subcommand.
#[derive(clap::Args)]
pub struct TimelineArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dfc.toml")]
    pub config: PathBuf,

    /// Product id to trace.
    #[arg(short, long)]
    pub product: String,

    /// Override the timeline output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
