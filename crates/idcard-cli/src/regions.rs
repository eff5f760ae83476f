//! # Regions Subcommand
//!
//! Lists the allow-listed two-character region codes.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use idcard_core::Region;

/// Arguments for `idcard regions`.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Print a JSON array instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RegionEntry {
    code: &'static str,
    name: &'static str,
}

/// Write the region table.
pub fn write_regions(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let entries: Vec<RegionEntry> = Region::ALL
            .iter()
            .map(|r| RegionEntry {
                code: r.code(),
                name: r.name(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for region in Region::ALL {
            writeln!(out, "  {:<4} {}", region.code(), region.name())?;
        }
        writeln!(out)?;
        writeln!(out, "Total: {} regions", Region::ALL.len())?;
    }
    Ok(())
}

/// Execute the regions subcommand.
pub fn run_regions(args: &RegionsArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    write_regions(args.json, &mut stdout.lock())?;
    Ok(0)
}
