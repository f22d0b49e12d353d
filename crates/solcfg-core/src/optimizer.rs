//! Optimizer settings.
//!
//! `runs` estimates how often each opcode of the deployed code will be
//! executed over the contract's lifetime. Low values bias the optimizer
//! toward small deployment bytecode, high values toward cheap execution.

use serde::{Deserialize, Serialize};

/// Default run estimate used by most build tools.
pub const DEFAULT_RUNS: u32 = 200;

/// Optimizer configuration passed through to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Whether optimization passes run at all.
    pub enabled: bool,
    /// Expected execution count per opcode.
    pub runs: u32,
}

impl OptimizerSettings {
    /// Enabled with an explicit run estimate.
    pub fn with_runs(runs: u32) -> Self {
        OptimizerSettings {
            enabled: true,
            runs,
        }
    }

    /// No optimization. `runs` keeps the default so re-enabling is cheap.
    pub fn disabled() -> Self {
        OptimizerSettings {
            enabled: false,
            runs: DEFAULT_RUNS,
        }
    }

    /// Profile for contracts deployed often and called rarely.
    pub fn for_deploy_size() -> Self {
        OptimizerSettings::with_runs(1)
    }

    /// Profile for contracts deployed once and called heavily.
    pub fn for_runtime_gas() -> Self {
        OptimizerSettings::with_runs(10_000)
    }
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        OptimizerSettings::with_runs(DEFAULT_RUNS)
    }
}
