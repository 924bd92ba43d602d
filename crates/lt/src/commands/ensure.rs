use anstream::println;
use clap::Args;
use lt_version::ensure_version;
use owo_colors::OwoColorize;
use tracing::debug;

use super::{Error, Result, parse_version};

#[derive(Args)]
pub struct EnsureArgs {
    /// Version that is available
    pub given: String,
    /// Minimum version that is required
    pub expected: String,
}

pub fn ensure(args: &EnsureArgs) -> Result<()> {
    let (ok, expected) = ensure_version(args.given.trim(), args.expected.trim())?;
    let given = parse_version(&args.given)?;
    debug!(%given, %expected, ok, "Checked minimum version");

    if !ok {
        return Err(Error::TooOld { given, expected });
    }

    println!("{given} {} {expected}", ">=".green());
    Ok(())
}
