//! CLI definitions for refrelay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// refrelay CLI.
#[derive(Parser)]
#[command(name = "refrelay")]
#[command(about = "HTTP relay for LLM invocation and reference-store passthrough")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (optional; defaults apply when it is missing)
    #[arg(short, long, default_value = "refrelay.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host (overrides HOST and the config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides PORT and the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate configuration, then print a redacted summary
    CheckConfig,
}
