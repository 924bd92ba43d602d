use anstream::println;
use clap::Args;
use lt_version::RangeSpec;
use owo_colors::OwoColorize;
use tracing::debug;

use super::{Result, parse_version};

#[derive(Args)]
pub struct ContainsArgs {
    /// Version range, e.g. "[1.0, 2.0)"
    pub range: String,
    /// Version to look for in the range
    pub version: String,
}

pub fn contains(args: &ContainsArgs) -> Result<bool> {
    let range = RangeSpec::parse(args.range.trim())?;
    let version = parse_version(&args.version)?;

    let inside = range.contains(&version);
    debug!(%range, %version, inside, "Checked range membership");

    if inside {
        println!("{}", "true".green());
    } else {
        println!("{}", "false".red());
    }
    Ok(inside)
}
