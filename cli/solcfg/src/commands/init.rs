//! `solcfg init` — configuration scaffolding.

use std::path::Path;

use anyhow::{bail, Context, Result};
use solcfg_core::{save_config, BuildConfig, VersionPin, CONFIG_FILE_NAME};

/// Write a default `solc.config.json` into `dir`.
///
/// `compiler` overrides the default version pin. Refuses to overwrite an
/// existing file.
pub fn run(dir: &Path, compiler: Option<&str>) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let config = match compiler {
        Some(version) => {
            let pin = VersionPin::parse(version)?;
            BuildConfig::with_compiler(pin)
        }
        None => BuildConfig::default(),
    };

    save_config(&path, &config)
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Created {}", path.display());
    println!("  compiler: solc {}", config.solc().version);
    println!("  evm:      {}", config.solc().settings.evm_version);
    Ok(())
}
