use anyhow::Result;
use clap::Parser;

use tscfg_cli::cli::{Cli, Commands};
use tscfg_cli::commands::{synthesize_command, validate_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Synthesize {
            request,
            out,
            compact,
        } => synthesize_command(&request, out.as_deref(), compact),
        Commands::Validate { request } => validate_command(&request),
    }
}
