use anyhow::{Context, Result};
use clap::Parser;
use quantify_core::QuantifyConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = QuantifyConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Extract(args) => {
            info!("Extract command: {:?}", args);
            cli::commands::extract::execute(args, config)?;
        }
        Commands::Analyze(args) => {
            info!("Analyze command: {:?}", args);
            // The archival check needs an async runtime
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::analyze::execute(args, config))?;
        }
        Commands::Calculate(args) => {
            info!("Calculate command: {:?}", args);
            cli::commands::calculate::execute(args)?;
        }
    }

    Ok(())
}
