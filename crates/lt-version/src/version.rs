use std::{cmp::Ordering, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{VersionError, parser};

/// A `major.minor.patch` version with an optional qualifier, e.g. `1.2.3-RC1`.
///
/// Versions order numerically by their triple first. When the triples match,
/// a qualified version sorts before the unqualified one (`1.0-RC1 < 1.0`), and
/// two qualifiers compare as plain strings.
#[derive(Clone, Eq, DeserializeFromStr, SerializeDisplay)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct VersionSpec {
    #[cfg_attr(test, proptest(strategy = "0..20u64"))]
    major: u64,
    #[cfg_attr(test, proptest(strategy = "0..20u64"))]
    minor: u64,
    #[cfg_attr(test, proptest(strategy = "0..20u64"))]
    patch: u64,
    #[cfg_attr(
        test,
        proptest(strategy = "proptest::option::of(\"[A-Za-z0-9_.-]{1,6}\")")
    )]
    qualifier: Option<String>,
}

impl VersionSpec {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_parts(major, minor, patch, None)
    }

    pub(crate) fn from_parts(major: u64, minor: u64, patch: u64, qualifier: Option<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier,
        }
    }

    pub fn parse(version: &str) -> Result<Self, VersionError> {
        parser::parse_version(version)
    }

    /// Replaces the qualifier. Fails unless it is one or more of `[A-Za-z0-9_.-]`.
    pub fn with_qualifier(self, qualifier: impl AsRef<str>) -> Result<Self, VersionError> {
        let qualifier = parser::parse_qualifier(qualifier.as_ref())?;
        Ok(Self {
            qualifier: Some(qualifier.to_owned()),
            ..self
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }

    /// The same numeric triple without a qualifier.
    pub fn release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Three-way comparison as `-1`, `0` or `1`.
    pub fn compare(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }

    /// Compares against a version that has not been parsed yet.
    pub fn compare_str(&self, other: &str) -> Result<Ordering, VersionError> {
        Ok(self.cmp(&Self::parse(other)?))
    }

    // Increments touch only their own field, so `1.2.3` becomes `2.2.3`.
    // TODO: confirm with downstream users whether lower fields should reset to zero.
    pub fn increment_major(&mut self) {
        self.major = self.major.saturating_add(1);
    }

    pub fn increment_minor(&mut self) {
        self.minor = self.minor.saturating_add(1);
    }

    pub fn increment_patch(&mut self) {
        self.patch = self.patch.saturating_add(1);
    }

    fn key(&self) -> (u64, u64, u64, Option<&str>) {
        (self.major, self.minor, self.patch, self.qualifier())
    }
}

impl From<u64> for VersionSpec {
    fn from(major: u64) -> Self {
        Self::new(major, 0, 0)
    }
}

impl From<(u64, u64, u64)> for VersionSpec {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl PartialEq for VersionSpec {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl std::hash::Hash for VersionSpec {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for VersionSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionSpec {
    fn cmp(&self, other: &Self) -> Ordering {
        let numbers = (self.major, self.minor, self.patch);
        let other_numbers = (other.major, other.minor, other.patch);

        numbers
            .cmp(&other_numbers)
            .then_with(|| match (&self.qualifier, &other.qualifier) {
                (None, None) => Ordering::Equal,
                // A release outranks any qualified build of the same numbers.
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl std::fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, ".{}", self.patch)?;
        }
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{qualifier}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VersionSpec({}, {}, {}, {:?})",
            self.major, self.minor, self.patch, self.qualifier
        )
    }
}

impl FromStr for VersionSpec {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        VersionSpec::parse(s)
    }
}
