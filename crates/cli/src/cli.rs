use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Synthesize the tsconfig document for a Bazel TypeScript compilation
#[derive(Parser)]
#[command(name = "tscfg", version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize the configuration document from a request file
    Synthesize {
        /// Path to the JSON synthesis request
        request: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Check a request without emitting a document
    Validate {
        /// Path to the JSON synthesis request
        request: PathBuf,
    },
}
