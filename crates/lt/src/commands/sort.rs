use std::io::BufRead;

use anstream::println;
use clap::Args;
use lt_version::VersionSpec;
use tracing::debug;

use super::{Result, parse_version};

#[derive(Args)]
pub struct SortArgs {
    /// Versions to sort; read one per line from stdin when none are given
    pub versions: Vec<String>,

    /// Print the newest version first
    #[arg(long)]
    pub reverse: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", env = "LT_FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn sort(args: &SortArgs) -> Result<Vec<VersionSpec>> {
    let inputs = if args.versions.is_empty() {
        debug!("No versions given, reading stdin");
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?
    } else {
        args.versions.clone()
    };

    let versions = sorted(&inputs, args.reverse)?;

    match args.format {
        OutputFormat::Text => {
            for version in &versions {
                println!("{version}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&versions)?);
        }
    }

    Ok(versions)
}

/// Parses every non-blank input and orders the results.
fn sorted(inputs: &[String], reverse: bool) -> Result<Vec<VersionSpec>> {
    let mut versions = inputs
        .iter()
        .filter(|input| !input.trim().is_empty())
        .map(|input| parse_version(input))
        .collect::<Result<Vec<_>>>()?;

    versions.sort();
    if reverse {
        versions.reverse();
    }
    Ok(versions)
}
