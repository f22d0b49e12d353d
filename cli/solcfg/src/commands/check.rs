//! `solcfg check` — configuration validation.

use std::path::Path;

use anyhow::{bail, Result};
use solcfg_core::validate_config;

use super::locate;

/// Load and validate a configuration, printing any issues found.
///
/// Exits non-zero (via error return) when an error-severity issue exists;
/// warnings alone pass.
pub fn run(cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let (config, path) = locate(cwd, config_path)?;

    match validate_config(&config) {
        Ok(()) => {
            println!("{}: ok", path.display());
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                println!("{}: {}", issue.severity, issue.message);
            }
            let errors = issues.iter().filter(|i| i.severity == "error").count();
            if errors > 0 {
                bail!("{} error(s) in {}", errors, path.display());
            }
            println!("{}: ok ({} warning(s))", path.display(), issues.len());
            Ok(())
        }
    }
}
