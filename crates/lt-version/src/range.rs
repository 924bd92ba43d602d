use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{VersionError, VersionSpec, parser};

/// An interval of versions with inclusive (`[`, `]`) or exclusive (`(`, `)`)
/// bounds, e.g. `[1.0, 2.0)`.
///
/// A missing bound leaves that side open. Nothing checks that `start <= end`;
/// a reversed range is valid and contains no versions.
#[derive(Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct RangeSpec {
    start: Option<VersionSpec>,
    start_inclusive: bool,
    end: Option<VersionSpec>,
    end_inclusive: bool,
}

impl RangeSpec {
    pub fn new(
        start: Option<VersionSpec>,
        start_inclusive: bool,
        end: Option<VersionSpec>,
        end_inclusive: bool,
    ) -> Self {
        Self {
            start,
            start_inclusive,
            end,
            end_inclusive,
        }
    }

    pub fn parse(range: &str) -> Result<Self, VersionError> {
        parser::parse_range(range)
    }

    pub fn start(&self) -> Option<&VersionSpec> {
        self.start.as_ref()
    }

    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    pub fn end(&self) -> Option<&VersionSpec> {
        self.end.as_ref()
    }

    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    pub fn contains(&self, version: &VersionSpec) -> bool {
        if let Some(start) = &self.start
            && (version < start || (!self.start_inclusive && version == start))
        {
            return false;
        }

        if let Some(end) = &self.end
            && (version > end || (!self.end_inclusive && version == end))
        {
            return false;
        }

        true
    }

    /// Like [`RangeSpec::contains`], for a version that has not been parsed yet.
    pub fn contains_str(&self, version: &str) -> Result<bool, VersionError> {
        Ok(self.contains(&VersionSpec::parse(version)?))
    }
}

impl std::fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.start_inclusive { '[' } else { '(' };
        let close = if self.end_inclusive { ']' } else { ')' };

        write!(f, "{open}")?;
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        write!(f, ", ")?;
        if let Some(end) = &self.end {
            write!(f, "{end}")?;
        }
        write!(f, "{close}")
    }
}

impl std::fmt::Debug for RangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct Bound<'a>(Option<&'a VersionSpec>);

        impl std::fmt::Debug for Bound<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.0 {
                    Some(version) => std::fmt::Debug::fmt(version, f),
                    None => write!(f, "None"),
                }
            }
        }

        write!(
            f,
            "RangeSpec({:?}, {}, {:?}, {})",
            Bound(self.start()),
            self.start_inclusive,
            Bound(self.end()),
            self.end_inclusive
        )
    }
}

impl FromStr for RangeSpec {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        RangeSpec::parse(s)
    }
}
