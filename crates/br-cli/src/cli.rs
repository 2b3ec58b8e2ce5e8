//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Bedtime calculator.
///
/// Recommends when to go to sleep, given when you want to wake up, how much
/// sleep you want and how much coffee you drink.
#[derive(Debug, Parser)]
#[command(name = "br", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate the ideal bedtime.
    Calculate(CalculateArgs),

    /// Show the active model coefficients.
    Coefficients,
}

/// Inputs for `br calculate`. Omitted values come from the config.
#[derive(Debug, Clone, Default, Args)]
pub struct CalculateArgs {
    /// Desired wake time (e.g., 07:00 or "7:00 AM").
    #[arg(long)]
    pub wake: Option<String>,

    /// Desired hours of sleep (e.g., 8 or 7.5).
    #[arg(long)]
    pub sleep: Option<f64>,

    /// Cups of coffee per day.
    #[arg(long, allow_negative_numbers = true)]
    pub coffee: Option<i64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
