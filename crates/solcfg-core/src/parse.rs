//! JSON parsing, serialization, validation, and discovery for configuration files.
//!
//! The record is stored as `solc.config.json` in the project root. This
//! module provides functions to load, validate, serialize, and locate
//! these files.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::optimizer::DEFAULT_RUNS;
use crate::version::VersionPin;

/// Canonical name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "solc.config.json";

/// A validation issue found in a configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a configuration from a `solc.config.json` file.
pub fn load_config(path: &Path) -> Result<BuildConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse a configuration from a JSON string.
pub fn parse_config(json_str: &str) -> Result<BuildConfig> {
    let config: BuildConfig = serde_json::from_str(json_str)?;
    Ok(config)
}

/// Serialize a configuration to pretty JSON.
pub fn config_to_json(config: &BuildConfig) -> Result<String> {
    let json_str = serde_json::to_string_pretty(config)?;
    Ok(json_str)
}

/// Write a configuration to a file, pretty-printed with a trailing newline.
pub fn save_config(path: &Path, config: &BuildConfig) -> Result<()> {
    let mut json_str = config_to_json(config)?;
    json_str.push('\n');
    std::fs::write(path, json_str)?;
    Ok(())
}

/// Locate and load the nearest `solc.config.json`, walking up from `start_dir`.
///
/// Returns the configuration together with the path it was loaded from,
/// or `None` if no ancestor directory contains one.
pub fn find_config(start_dir: &Path) -> Result<Option<(BuildConfig, PathBuf)>> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            let config = load_config(&candidate)?;
            return Ok(Some((config, candidate)));
        }
        if !dir.pop() {
            return Ok(None);
        }
    }
}

/// Validate a configuration for consistency.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
/// Warnings alone still validate as `Err`; callers decide how strict to be
/// by inspecting severities.
pub fn validate_config(config: &BuildConfig) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let solc = config.solc();

    // 1. The pinned release must be able to target the selected fork.
    let fork = solc.settings.evm_version;
    let floor = fork.first_solc();
    if *solc.version.version() < floor {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "solc {} cannot target '{}' (requires at least {})",
                solc.version, fork, floor
            ),
        });
    }

    // 2. The run estimate is a positive execution count.
    if solc.settings.optimizer.enabled && solc.settings.optimizer.runs == 0 {
        issues.push(ValidationIssue {
            severity: "warning",
            message: "optimizer is enabled with runs = 0; the run estimate should be at least 1"
                .into(),
        });
    }

    // 3. A custom run count is dead weight when the optimizer is off.
    if !solc.settings.optimizer.enabled && solc.settings.optimizer.runs != DEFAULT_RUNS {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!(
                "optimizer is disabled; runs = {} is ignored by the compiler",
                solc.settings.optimizer.runs
            ),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a `solc.config.json` template for the given compiler pin.
pub fn generate_template(version: &str) -> Result<String> {
    let pin = VersionPin::parse(version)?;
    let config = BuildConfig::with_compiler(pin);
    config_to_json(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evm::EvmVersion;
    use crate::optimizer::OptimizerSettings;

    #[test]
    fn round_trip_default() {
        let original = BuildConfig::default();
        let json_str = config_to_json(&original).unwrap();
        let parsed = parse_config(&json_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn round_trip_is_idempotent() {
        let config = BuildConfig::default();
        let first = config_to_json(&config).unwrap();
        let second = config_to_json(&parse_config(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_consumer_shape() {
        let json_str = r#"
        {
          "compilers": {
            "solc": {
              "version": "0.6.6",
              "settings": {
                "optimizer": {
                  "enabled": true,
                  "runs": 200
                },
                "evmVersion": "istanbul"
              }
            }
          }
        }
        "#;
        let config = parse_config(json_str).unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_config("this is not valid json {{{").is_err());
    }

    #[test]
    fn parse_missing_field_returns_error() {
        assert!(parse_config(r#"{ "compilers": { "solc": { "version": "0.6.6" } } }"#).is_err());
    }

    #[test]
    fn parse_range_pin_returns_error() {
        let json_str = r#"
        {
          "compilers": {
            "solc": {
              "version": "^0.6",
              "settings": {
                "optimizer": { "enabled": true, "runs": 200 },
                "evmVersion": "istanbul"
              }
            }
          }
        }
        "#;
        assert!(parse_config(json_str).is_err());
    }

    #[test]
    fn validate_default() {
        assert!(validate_config(&BuildConfig::default()).is_ok());
    }

    #[test]
    fn validate_fork_too_new_for_pin() {
        let mut config = BuildConfig::default();
        config.solc_mut().settings.evm_version = EvmVersion::London;
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.severity == "error" && i.message.contains("london")));
    }

    #[test]
    fn validate_zero_runs_warns() {
        let mut config = BuildConfig::default();
        config.solc_mut().settings.optimizer.runs = 0;
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.severity == "warning" && i.message.contains("runs = 0")));
    }

    #[test]
    fn validate_ignored_runs_warns() {
        let mut config = BuildConfig::default();
        config.solc_mut().settings.optimizer = OptimizerSettings {
            enabled: false,
            runs: 999,
        };
        let issues = validate_config(&config).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.severity == "warning" && i.message.contains("ignored")));
    }

    #[test]
    fn generate_template_is_valid() {
        let json_str = generate_template("0.8.24").unwrap();
        let config = parse_config(&json_str).unwrap();
        assert_eq!(config.solc().version.to_string(), "0.8.24");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn generate_template_rejects_range() {
        assert!(generate_template(">=0.6").is_err());
    }

    #[test]
    fn load_not_found() {
        let result = load_config(Path::new("/nonexistent/solc.config.json"));
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound { .. }));
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = BuildConfig::default();
        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("contracts").join("tokens");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        save_config(&path, &BuildConfig::default()).unwrap();

        let (config, found_at) = find_config(&nested).unwrap().unwrap();
        assert_eq!(config, BuildConfig::default());
        assert_eq!(found_at, path);
    }

    #[test]
    fn find_config_none_without_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config(dir.path()).unwrap().is_none());
    }
}
