//! Compiler version pin.
//!
//! A pin names exactly one solc release. Range syntax (`^0.6`, `>=0.5.0`)
//! is rejected: the external build tool invokes a single compiler binary,
//! so the record must be unambiguous.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An exact solc release, e.g. `0.6.6`.
///
/// Serializes as the bare version string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionPin(Version);

impl VersionPin {
    /// Pin a release by its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionPin(Version::new(major, minor, patch))
    }

    /// Parse a pin from a version string.
    ///
    /// Accepts only full `major.minor.patch` releases (pre-release and
    /// build metadata allowed). Requirement syntax fails here.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        Version::parse(input)
            .map(VersionPin)
            .map_err(|e| ConfigError::Version {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// The pinned release.
    pub fn version(&self) -> &Version {
        &self.0
    }
}

impl fmt::Display for VersionPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VersionPin {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionPin::parse(s)
    }
}

impl From<Version> for VersionPin {
    fn from(version: Version) -> Self {
        VersionPin(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exact_release() {
        let pin = VersionPin::parse("0.6.6").unwrap();
        assert_eq!(pin, VersionPin::new(0, 6, 6));
        assert_eq!(pin.to_string(), "0.6.6");
    }

    #[test]
    fn parse_prerelease() {
        let pin = VersionPin::parse("0.8.0-nightly.2020.12.14").unwrap();
        assert_eq!(pin.version().major, 0);
        assert_eq!(pin.version().minor, 8);
    }

    #[test]
    fn reject_caret_range() {
        assert!(VersionPin::parse("^0.6").is_err());
    }

    #[test]
    fn reject_comparator_range() {
        assert!(VersionPin::parse(">=0.5.0").is_err());
    }

    #[test]
    fn reject_partial_version() {
        assert!(VersionPin::parse("0.6").is_err());
    }

    #[test]
    fn ordering_follows_semver() {
        assert!(VersionPin::new(0, 5, 14) < VersionPin::new(0, 6, 6));
        assert!(VersionPin::new(0, 8, 7) > VersionPin::new(0, 8, 5));
    }

    #[test]
    fn serializes_as_string() {
        let pin = VersionPin::new(0, 6, 6);
        let json = serde_json::to_string(&pin).unwrap();
        assert_eq!(json, "\"0.6.6\"");
        let back: VersionPin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pin);
    }
}
