use std::cmp::Ordering;

use anstream::println;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::debug;

use super::{Result, parse_version};

#[derive(Args)]
pub struct CompareArgs {
    /// Version on the left-hand side
    pub left: String,
    /// Version on the right-hand side
    pub right: String,
}

/// Prints `LEFT <op> RIGHT` in canonical form, where `<op>` is `<`, `=` or `>`.
pub fn compare(args: &CompareArgs) -> Result<Ordering> {
    let left = parse_version(&args.left)?;
    let right = parse_version(&args.right)?;

    let ordering = left.cmp(&right);
    debug!(?left, ?right, ?ordering, "Compared versions");

    println!("{left} {} {right}", symbol(ordering).cyan());
    Ok(ordering)
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
