//! `solcfg evm` — EVM fork listing.

use anyhow::Result;
use solcfg_core::EvmVersion;

/// List the forks solc can target, oldest first.
pub fn list() -> Result<()> {
    println!("EVM fork targets:");
    println!();
    for fork in EvmVersion::ALL {
        let marker = if fork == EvmVersion::default() {
            "  (default)"
        } else {
            ""
        };
        println!(
            "  {:<18} since solc {}{}",
            fork.wire_name(),
            fork.first_solc(),
            marker
        );
    }
    Ok(())
}
