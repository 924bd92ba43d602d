use anstream::println;
use clap::Args;
use lt_version::RangeSpec;

use super::{Result, parse_version};

#[derive(Args)]
pub struct CanonicalArgs {
    /// A version such as "1.2.0", or a range such as "( 1.0 , 2.0 ]"
    pub input: String,
}

pub fn canonical(args: &CanonicalArgs) -> Result<String> {
    let input = args.input.trim();

    let rendered = if input.starts_with(['[', '(']) {
        RangeSpec::parse(input)?.to_string()
    } else {
        parse_version(input)?.to_string()
    };

    println!("{rendered}");
    Ok(rendered)
}
