//! The build-tool configuration record.
//!
//! Field names and nesting are the compatibility surface: the external
//! build tool looks up `compilers.solc.version`, `settings.optimizer`,
//! and `settings.evmVersion` verbatim, so the serde shape here must not
//! drift.

use serde::{Deserialize, Serialize};

use crate::evm::EvmVersion;
use crate::optimizer::OptimizerSettings;
use crate::version::VersionPin;

/// Top-level configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Per-compiler configuration sections.
    pub compilers: CompilersSection,
}

/// The `compilers` section. Only solc is configured here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompilersSection {
    pub solc: SolcConfig,
}

/// Configuration for one solc invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcConfig {
    /// Exact compiler release to invoke.
    pub version: VersionPin,
    /// Settings passed through to the compiler.
    pub settings: SolcSettings,
}

/// The `settings` object forwarded to solc.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolcSettings {
    pub optimizer: OptimizerSettings,
    #[serde(rename = "evmVersion")]
    pub evm_version: EvmVersion,
}

impl BuildConfig {
    /// Default record with a custom compiler pin.
    pub fn with_compiler(version: VersionPin) -> Self {
        BuildConfig {
            compilers: CompilersSection {
                solc: SolcConfig {
                    version,
                    settings: SolcSettings::default(),
                },
            },
        }
    }

    /// The solc section.
    pub fn solc(&self) -> &SolcConfig {
        &self.compilers.solc
    }

    /// Mutable access to the solc section.
    pub fn solc_mut(&mut self) -> &mut SolcConfig {
        &mut self.compilers.solc
    }
}

impl Default for SolcConfig {
    fn default() -> Self {
        SolcConfig {
            version: VersionPin::new(0, 6, 6),
            settings: SolcSettings::default(),
        }
    }
}
