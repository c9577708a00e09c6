//! prewrap CLI - diagram code block wrapper.
//!
//! Provides commands for:
//! - `wrap`: Wrap diagram code blocks in a HAST JSON document
//! - `scan`: List diagram code blocks without rewriting

mod commands;
mod error;
mod io;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ScanArgs, WrapArgs};
use output::Output;

/// prewrap - Diagram code block wrapper.
#[derive(Parser)]
#[command(name = "prewrap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap diagram code blocks, preserving their source.
    Wrap(WrapArgs),
    /// List diagram code blocks without rewriting.
    Scan(ScanArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Wrap(args) => args.verbose,
        Commands::Scan(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Wrap(args) => args.execute(),
        Commands::Scan(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}
