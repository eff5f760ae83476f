//! # Checksum Subcommand
//!
//! Computes the check character that completes a 17-digit body.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use idcard_core::checksum::check_character;

/// Arguments for `idcard checksum`.
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// The first 17 digits of an 18-character number.
    pub body: String,

    /// Print the full 18-character number instead of only the check character.
    #[arg(long)]
    pub full: bool,
}

/// Write the check character (or full number). Returns the exit code.
pub fn write_checksum(args: &ChecksumArgs, out: &mut impl Write) -> Result<u8> {
    let body = args.body.trim();
    match check_character(body) {
        Some(check) if args.full => writeln!(out, "{body}{check}")?,
        Some(check) => writeln!(out, "{check}")?,
        None => {
            tracing::error!(body, "expected exactly 17 ASCII digits");
            return Ok(1);
        }
    }
    Ok(0)
}

/// Execute the checksum subcommand.
pub fn run_checksum(args: &ChecksumArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    write_checksum(args, &mut stdout.lock())
}
