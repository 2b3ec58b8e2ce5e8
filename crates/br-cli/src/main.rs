use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use br_cli::commands::{calculate, coefficients};
use br_cli::{Cli, Commands, Config};
use br_core::{BedtimeEstimator, Coefficients, LinearSleepModel};

/// Load config and the coefficient table it points at.
///
/// Returns the coefficients with a description of where they came from.
fn load_coefficients(config_path: Option<&Path>) -> Result<(Config, Coefficients, String)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let (coefficients, source) = match &config.coefficients_path {
        Some(path) => {
            let coefficients = Coefficients::load(path)
                .with_context(|| format!("failed to load coefficients from {}", path.display()))?;
            (coefficients, path.display().to_string())
        }
        None => (Coefficients::EMBEDDED, "embedded".to_string()),
    };
    Ok((config, coefficients, source))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Calculate(args)) => {
            let (config, coefficients, _source) = load_coefficients(cli.config.as_deref())?;
            let estimator = BedtimeEstimator::new(LinearSleepModel::new(coefficients));
            calculate::run(&mut std::io::stdout().lock(), &estimator, &config, args)?;
        }
        Some(Commands::Coefficients) => {
            let (_config, coefficients, source) = load_coefficients(cli.config.as_deref())?;
            coefficients::run(&mut std::io::stdout().lock(), &coefficients, &source)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
