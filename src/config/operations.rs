//! Config loading and validation.

use super::model::Config;
use crate::error::{LintError, Result};
use std::path::Path;

/// Letters `git diff --diff-filter` understands (lowercase excludes).
const DIFF_FILTER_LETTERS: &str = "ACDMRTUXB";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LintError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LintError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LintError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        validate_diff_filter(&self.diff_filter)
    }
}

/// Check a `--diff-filter` value: non-empty, only known status letters.
pub fn validate_diff_filter(filter: &str) -> Result<()> {
    if filter.is_empty() {
        return Err(LintError::ConfigError(
            "diff_filter must not be empty".to_string(),
        ));
    }

    if let Some(bad) = filter
        .chars()
        .find(|c| !DIFF_FILTER_LETTERS.contains(c.to_ascii_uppercase()))
    {
        return Err(LintError::ConfigError(format!(
            "diff_filter contains unknown status letter '{}' (expected letters from {})",
            bad, DIFF_FILTER_LETTERS
        )));
    }

    Ok(())
}
