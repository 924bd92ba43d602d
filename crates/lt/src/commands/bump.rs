use anstream::println;
use clap::Args;
use lt_version::VersionSpec;

use super::{Result, parse_version};

#[derive(Args)]
pub struct BumpArgs {
    /// Version to increment
    pub version: String,

    /// Which field to increment; the other fields are left as they are
    #[arg(long, value_enum, default_value_t = Field::Patch)]
    pub field: Field,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    Major,
    Minor,
    #[default]
    Patch,
}

pub fn bump(args: &BumpArgs) -> Result<VersionSpec> {
    let mut version = parse_version(&args.version)?;

    match args.field {
        Field::Major => version.increment_major(),
        Field::Minor => version.increment_minor(),
        Field::Patch => version.increment_patch(),
    }

    println!("{version}");
    Ok(version)
}
