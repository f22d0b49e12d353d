//! `solcfg show` — configuration display.

use std::path::Path;

use anyhow::Result;
use solcfg_core::config_to_json;

use super::locate;

/// Print a configuration, either as a human summary or as raw JSON.
pub fn run(cwd: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let (config, path) = locate(cwd, config_path)?;

    if json {
        println!("{}", config_to_json(&config)?);
        return Ok(());
    }

    let solc = config.solc();
    let opt = &solc.settings.optimizer;
    println!("=== {} ===", path.display());
    println!("Compiler:   solc {}", solc.version);
    if opt.enabled {
        println!("Optimizer:  enabled (runs = {})", opt.runs);
    } else {
        println!("Optimizer:  disabled");
    }
    println!(
        "EVM target: {} (since solc {})",
        solc.settings.evm_version,
        solc.settings.evm_version.first_solc()
    );
    Ok(())
}
