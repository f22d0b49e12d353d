//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use solcfg_core::{find_config, load_config, BuildConfig, CONFIG_FILE_NAME};

pub mod check;
pub mod evm;
pub mod init;
pub mod show;

/// Resolve the configuration to operate on.
///
/// An explicit `--config` path must exist; otherwise the nearest
/// `solc.config.json` above `cwd` is used.
pub(crate) fn locate(cwd: &Path, explicit: Option<&Path>) -> Result<(BuildConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let config = load_config(path)
                .with_context(|| format!("loading {}", path.display()))?;
            Ok((config, path.to_path_buf()))
        }
        None => match find_config(cwd)? {
            Some(found) => Ok(found),
            None => bail!(
                "no {CONFIG_FILE_NAME} found in {} or any parent directory",
                cwd.display()
            ),
        },
    }
}
