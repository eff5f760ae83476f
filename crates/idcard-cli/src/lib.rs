//! # idcard-cli — Command-Line Front End
//!
//! Provides the `idcard` command-line interface over `idcard-core`.
//!
//! ## Subcommands
//!
//! - `idcard check` — Validate numbers from arguments, a file, or stdin.
//! - `idcard regions` — List allow-listed region codes.
//! - `idcard checksum` — Compute the check character for a 17-digit body.
//!
//! Results go to stdout; logs go to stderr so output can be piped.

pub mod check;
pub mod checksum;
pub mod regions;

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins when set, otherwise the `-v` count
/// picks the level.
pub fn env_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}
