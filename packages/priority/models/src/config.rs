//! Engine configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Passport age assumed when a record has no usable passport date.
pub const DEFAULT_PASSPORT_AGE: i32 = 3;

/// Label used for objects without a region in regional breakdowns.
pub const DEFAULT_UNKNOWN_REGION_LABEL: &str = "Неизвестный регион";

/// Errors that can occur while loading a [`PriorityConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables shared by every caller of the priority engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityConfig {
    /// Passport age (years) substituted for missing or unparseable dates.
    pub default_passport_age: i32,
    /// Region label for objects without a region.
    pub unknown_region_label: String,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            default_passport_age: DEFAULT_PASSPORT_AGE,
            unknown_region_label: DEFAULT_UNKNOWN_REGION_LABEL.to_string(),
        }
    }
}

impl PriorityConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PriorityConfig::from_toml_str("").unwrap();
        assert_eq!(config, PriorityConfig::default());
        assert_eq!(config.default_passport_age, 3);
    }

    #[test]
    fn overrides_default_age() {
        let config = PriorityConfig::from_toml_str("default_passport_age = 5").unwrap();
        assert_eq!(config.default_passport_age, 5);
        assert_eq!(config.unknown_region_label, DEFAULT_UNKNOWN_REGION_LABEL);
    }

    #[test]
    fn overrides_region_label() {
        let config =
            PriorityConfig::from_toml_str("unknown_region_label = \"Unknown region\"").unwrap();
        assert_eq!(config.unknown_region_label, "Unknown region");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = PriorityConfig::from_toml_str("default_age = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PriorityConfig::load(Path::new("/nonexistent/hydro_map.toml")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/hydro_map.toml"));
            }
            ConfigError::Parse(e) => panic!("expected Io error, got parse error: {e}"),
        }
    }

    #[test]
    fn io_error_message_names_the_file() {
        let err = PriorityConfig::load(Path::new("/nonexistent/hydro_map.toml")).unwrap_err();
        let message = err.to_string();
        assert!(
            message.starts_with("Failed to read config /nonexistent/hydro_map.toml: "),
            "{message}"
        );
    }
}
