//! refrelay - HTTP relay for LLM invocation and reference-store passthrough
//!
//! Main entry point for the refrelay CLI and server.

mod cli;
mod register;
mod server;

use clap::Parser;
use tracing::{info, warn};

use refrelay_config::{Config, ConfigLoader, ConfigValidator, EnvOverrides};

use cli::{Cli, Commands};
use server::{config_summary, init_tracing, run_server};

/// File, then environment, then CLI flags.
fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    EnvOverrides::from_process().apply(&mut config)?;

    if let Some(Commands::Run { host, port }) = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let warnings = ConfigValidator::validate(&config).into_result()?;

    match cli.command {
        Some(Commands::CheckConfig) => {
            println!("{}", config_summary(&config));
            for warning in &warnings {
                println!("warning: {}: {}", warning.path, warning.message);
            }
            println!("Configuration OK");
            Ok(())
        }
        None | Some(Commands::Run { .. }) => {
            let _guard = init_tracing(&config)?;
            if let Ok(path) = dotenv {
                info!("Loaded environment from {}", path.display());
            }
            for warning in &warnings {
                warn!("Config {}: {}", warning.path, warning.message);
            }
            run_server(config).await
        }
    }
}
