use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::ParseError;
use crate::version::parser;

/// A `major.minor.patch` version number.
///
/// `Ord` compares major, then minor, then patch. [`Version::is_bigger`] is a
/// different, component-wise check and does not agree with `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Parse `text` into this instance.
    ///
    /// On failure the instance is reset to `0.0.0`, whatever it held before.
    pub fn parse_into(&mut self, text: &str) -> Result<(), ParseError> {
        match parser::parse(text) {
            Ok(version) => {
                *self = version;
                Ok(())
            }
            Err(e) => {
                *self = Self::default();
                Err(e)
            }
        }
    }

    /// True when all components are zero
    pub const fn is_null(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }

    /// True when any single component is greater than the same component of
    /// `other`, each checked on its own.
    ///
    /// This is not precedence ordering: `1.9.0` is bigger than `2.0.0` here
    /// because its minor is greater. Use `>` for precedence.
    pub const fn is_bigger(&self, other: &Version) -> bool {
        self.major > other.major || self.minor > other.minor || self.patch > other.patch
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        semver::Version::new(
            u64::from(version.major),
            u64::from(version.minor),
            u64::from(version.patch),
        )
    }
}
