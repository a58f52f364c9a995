//! rustcn CLI - Rust中文 portal configuration.
//!
//! Provides commands for:
//! - `build`: Assemble, validate and write the site configuration
//! - `check`: Assemble and validate without writing
//! - `changelog`: Show the configuration revision history

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ChangelogArgs, CheckArgs};
use output::Output;

/// rustcn - Rust中文 documentation portal configuration.
#[derive(Parser)]
#[command(name = "rustcn", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble, validate and write the site configuration.
    Build(BuildArgs),
    /// Assemble and validate the site configuration.
    Check(CheckArgs),
    /// Show the configuration revision history.
    Changelog(ChangelogArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Changelog(_) => false,
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
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Changelog(args) => {
            args.execute();
            Ok(())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
