//! EVM hard-fork targets.
//!
//! The `evmVersion` setting selects which instruction-set semantics the
//! generated bytecode must conform to. Variants are ordered chronologically,
//! so `Ord` answers "is fork A older than fork B".

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An EVM hard fork that solc can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvmVersion {
    Homestead,
    TangerineWhistle,
    SpuriousDragon,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    Berlin,
    London,
    Paris,
    Shanghai,
    Cancun,
    Prague,
}

impl EvmVersion {
    /// Every fork solc accepts, oldest first.
    pub const ALL: [EvmVersion; 13] = [
        EvmVersion::Homestead,
        EvmVersion::TangerineWhistle,
        EvmVersion::SpuriousDragon,
        EvmVersion::Byzantium,
        EvmVersion::Constantinople,
        EvmVersion::Petersburg,
        EvmVersion::Istanbul,
        EvmVersion::Berlin,
        EvmVersion::London,
        EvmVersion::Paris,
        EvmVersion::Shanghai,
        EvmVersion::Cancun,
        EvmVersion::Prague,
    ];

    /// The identifier the external build tool expects.
    pub fn wire_name(self) -> &'static str {
        match self {
            EvmVersion::Homestead => "homestead",
            EvmVersion::TangerineWhistle => "tangerineWhistle",
            EvmVersion::SpuriousDragon => "spuriousDragon",
            EvmVersion::Byzantium => "byzantium",
            EvmVersion::Constantinople => "constantinople",
            EvmVersion::Petersburg => "petersburg",
            EvmVersion::Istanbul => "istanbul",
            EvmVersion::Berlin => "berlin",
            EvmVersion::London => "london",
            EvmVersion::Paris => "paris",
            EvmVersion::Shanghai => "shanghai",
            EvmVersion::Cancun => "cancun",
            EvmVersion::Prague => "prague",
        }
    }

    /// The first solc release that can target this fork.
    ///
    /// The `evmVersion` setting itself appeared in 0.4.21, so everything
    /// up to constantinople shares that floor.
    pub fn first_solc(self) -> Version {
        match self {
            EvmVersion::Homestead
            | EvmVersion::TangerineWhistle
            | EvmVersion::SpuriousDragon
            | EvmVersion::Byzantium
            | EvmVersion::Constantinople => Version::new(0, 4, 21),
            EvmVersion::Petersburg => Version::new(0, 5, 5),
            EvmVersion::Istanbul => Version::new(0, 5, 14),
            EvmVersion::Berlin => Version::new(0, 8, 5),
            EvmVersion::London => Version::new(0, 8, 7),
            EvmVersion::Paris => Version::new(0, 8, 18),
            EvmVersion::Shanghai => Version::new(0, 8, 20),
            EvmVersion::Cancun => Version::new(0, 8, 24),
            EvmVersion::Prague => Version::new(0, 8, 27),
        }
    }
}

impl Default for EvmVersion {
    fn default() -> Self {
        EvmVersion::Istanbul
    }
}

impl fmt::Display for EvmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for EvmVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvmVersion::ALL
            .into_iter()
            .find(|fork| fork.wire_name() == s)
            .ok_or_else(|| ConfigError::UnknownEvmVersion {
                input: s.to_string(),
            })
    }
}
