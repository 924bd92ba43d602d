pub mod bump;
pub mod canonical;
pub mod compare;
pub mod contains;
pub mod ensure;
pub mod sort;

use lt_version::{VersionError, VersionSpec};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidFormat(#[from] VersionError),
    #[error("Version {given} is older than the required {expected}")]
    #[diagnostic(code(lt::too_old), help("install a newer version and try again"))]
    TooOld {
        given: VersionSpec,
        expected: VersionSpec,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = miette::Result<T, Error>;

/// Command-line arguments often carry stray whitespace, which the parsers reject.
fn parse_version(input: &str) -> Result<VersionSpec> {
    Ok(VersionSpec::parse(input.trim())?)
}
