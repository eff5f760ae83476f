//! # Check Subcommand
//!
//! Validates identity card numbers given on the command line, read from a
//! file, or piped through stdin.
//!
//! ## Usage
//!
//! ```bash
//! idcard check 110101199003071233 11010119900307123X
//! idcard check --file numbers.txt --explain
//! cat numbers.txt | idcard check --stdin --json
//! ```
//!
//! Exit code is 0 when every input is valid, 1 when any is invalid, and 2
//! when there was nothing to check.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use idcard_core::{IdCardFormat, IdCardNumber, NaiveDate, Region};

/// Arguments for `idcard check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identity card numbers to validate.
    pub numbers: Vec<String>,

    /// Read numbers from a file, one per line.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read numbers from stdin, one per line.
    #[arg(long)]
    pub stdin: bool,

    /// Print a JSON array of reports instead of text lines.
    #[arg(long)]
    pub json: bool,

    /// Append the reason to every invalid line (text output only).
    #[arg(long)]
    pub explain: bool,
}

/// Outcome of validating one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The input exactly as it was checked.
    pub input: String,
    /// Whether every validation stage passed.
    pub valid: bool,
    /// Legacy or current layout, for valid inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<IdCardFormat>,
    /// Two-character region code, for valid inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
    /// English region name, for valid inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<&'static str>,
    /// Decoded birth date, for valid inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Failing stage and message, for invalid inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckReport {
    /// Validate `input` and record what was learned.
    pub fn evaluate(input: &str) -> Self {
        match IdCardNumber::new(input) {
            Ok(id) => {
                let region: Region = id.region();
                Self {
                    input: input.to_string(),
                    valid: true,
                    format: Some(id.format()),
                    region: Some(region.code()),
                    region_name: Some(region.name()),
                    birth_date: Some(id.birth_date()),
                    reason: None,
                }
            }
            Err(e) => {
                tracing::debug!(input, stage = e.stage(), "rejected");
                Self {
                    input: input.to_string(),
                    valid: false,
                    format: None,
                    region: None,
                    region_name: None,
                    birth_date: None,
                    reason: Some(format!("{}: {e}", e.stage())),
                }
            }
        }
    }

    /// One tab-separated output line.
    pub fn text_line(&self, explain: bool) -> String {
        match (&self.reason, self.valid, explain) {
            (_, true, _) => format!("{}\tvalid", self.input),
            (Some(reason), false, true) => format!("{}\tinvalid\t{reason}", self.input),
            _ => format!("{}\tinvalid", self.input),
        }
    }
}

/// Collect non-blank, trimmed lines.
///
/// Lines are decoded lossily, so a line that is not UTF-8 is kept (with
/// replacement characters) and later reported invalid instead of aborting
/// the batch.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.split(b'\n') {
        let line = line.context("failed to read input line")?;
        let line = String::from_utf8_lossy(&line);
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

/// Read numbers from a file, one per line.
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_lines(std::io::BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Gather inputs from arguments, then `--file`, then `--stdin`.
fn gather_inputs(args: &CheckArgs) -> Result<Vec<String>> {
    // Arguments are checked verbatim; only file and stdin lines are trimmed.
    let mut inputs: Vec<String> = args.numbers.clone();
    if let Some(path) = &args.file {
        let from_file = read_file(path)?;
        tracing::info!(path = %path.display(), count = from_file.len(), "read numbers from file");
        inputs.extend(from_file);
    }
    if args.stdin {
        let from_stdin = read_lines(std::io::stdin().lock())?;
        tracing::info!(count = from_stdin.len(), "read numbers from stdin");
        inputs.extend(from_stdin);
    }
    Ok(inputs)
}

/// Write reports in the requested format. Returns the exit code.
pub fn write_reports(
    reports: &[CheckReport],
    json: bool,
    explain: bool,
    out: &mut impl Write,
) -> Result<u8> {
    if json {
        serde_json::to_writer_pretty(&mut *out, reports).context("failed to encode reports")?;
        writeln!(out)?;
    } else {
        for report in reports {
            writeln!(out, "{}", report.text_line(explain))?;
        }
    }
    out.flush()?;

    let invalid = reports.iter().filter(|r| !r.valid).count();
    Ok(if invalid == 0 { 0 } else { 1 })
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let inputs = gather_inputs(args)?;
    if inputs.is_empty() {
        tracing::warn!("no identity card numbers given; pass them as arguments, --file, or --stdin");
        return Ok(2);
    }

    let reports: Vec<CheckReport> = inputs.iter().map(|i| CheckReport::evaluate(i)).collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(total = reports.len(), invalid, "validation complete");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&reports, args.json, args.explain, &mut out)
}
