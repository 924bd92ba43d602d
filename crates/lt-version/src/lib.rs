mod error;
mod parser;
pub mod range;
pub mod version;

pub use error::{Grammar, VersionError};
pub use range::RangeSpec;
pub use version::VersionSpec;

/// Checks `given` against the minimum version `expected`.
///
/// Returns whether `given` is at least `expected`, together with the parsed
/// `expected` version so callers can report what was required.
pub fn ensure_version(given: &str, expected: &str) -> Result<(bool, VersionSpec), VersionError> {
    let given = VersionSpec::parse(given)?;
    let expected = VersionSpec::parse(expected)?;

    Ok((given >= expected, expected))
}
