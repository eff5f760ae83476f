//! # idcard CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use idcard_cli::check::{run_check, CheckArgs};
use idcard_cli::checksum::{run_checksum, ChecksumArgs};
use idcard_cli::env_filter;
use idcard_cli::regions::{run_regions, RegionsArgs};

/// Resident identity card number toolkit.
///
/// Validates 15- and 18-character identity card numbers, lists region
/// codes, and computes check characters.
#[derive(Parser, Debug)]
#[command(name = "idcard", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identity card numbers.
    Check(CheckArgs),

    /// List allow-listed region codes.
    Regions(RegionsArgs),

    /// Compute the check character for the first 17 digits.
    Checksum(ChecksumArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "idcard CLI starting");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Regions(args) => run_regions(&args),
        Commands::Checksum(args) => run_checksum(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
