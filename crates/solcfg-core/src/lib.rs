//! Solidity compiler configuration model for the solcfg toolkit.
//!
//! Models the build-tool configuration record consumed by solc-driven
//! pipelines: a compiler version pin, optimizer settings, and a target
//! EVM version. Provides parsing, serialization, file discovery, and
//! validation for `solc.config.json` files.

pub mod config;
pub mod error;
pub mod evm;
pub mod optimizer;
pub mod parse;
pub mod version;

pub use config::{BuildConfig, CompilersSection, SolcConfig, SolcSettings};
pub use error::{ConfigError, Result};
pub use evm::EvmVersion;
pub use optimizer::OptimizerSettings;
pub use parse::{
    config_to_json, find_config, generate_template, load_config, parse_config, save_config,
    validate_config, ValidationIssue, CONFIG_FILE_NAME,
};
pub use version::VersionPin;
