// crates/contacts-core/src/config.rs - Configuration System
//
// This module provides the configuration schema and loading mechanism for the
// contacts CLI. It handles the hierarchy of configuration sources and gives
// the rest of the code one resolved `ContactsConfig` value to work with.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--file, --page-size; applied by the CLI)
// 2. Environment variables (CONTACTS_PAGE_SIZE, CONTACTS_MAX_ATTEMPTS)
// 3. Config file (--config path, else ./contacts.toml when present)
// 4. Built-in defaults
//
// EXAMPLE contacts.toml:
// ```toml
// [store]
// path = "data/contacts.csv"
//
// [display]
// page_size = 10
//
// [input]
// max_attempts = 3   # 0 = keep asking until input ends
// ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "contacts.toml";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every section is `#[serde(default)]` so a partial file (or none at all)
/// still yields a usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactsConfig {
    /// Backing file settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Table display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interactive input settings
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the contact file, relative to the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown per page by `read`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// How many times an invalid phone value is re-prompted before the
    /// operation is cancelled; 0 means no limit
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from every source
    ///
    /// LOADING STRATEGY:
    /// 1. `explicit` config file if given (must exist)
    /// 2. otherwise `working_dir/contacts.toml` if it exists
    /// 3. otherwise built-in defaults
    /// 4. environment overrides on top
    /// 5. validation of the result
    pub fn load_config(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> ConfigResult<ContactsConfig> {
        let mut config = match explicit {
            Some(path) => Self::load_file(path)?,
            None => {
                let implicit = working_dir.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::load_file(&implicit)?
                } else {
                    ContactsConfig::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Parse a single TOML config file
    pub fn load_file(path: &Path) -> ConfigResult<ContactsConfig> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Apply environment variable overrides
    ///
    /// - CONTACTS_PAGE_SIZE -> display.page_size
    /// - CONTACTS_MAX_ATTEMPTS -> input.max_attempts
    ///
    /// The lookup is injected so tests never touch the process environment.
    pub fn apply_env_overrides<F>(config: &mut ContactsConfig, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CONTACTS_PAGE_SIZE") {
            config.display.page_size = value.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "CONTACTS_PAGE_SIZE must be a positive integer, got '{}'",
                    value
                ))
            })?;
        }

        if let Some(value) = lookup("CONTACTS_MAX_ATTEMPTS") {
            config.input.max_attempts = value.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "CONTACTS_MAX_ATTEMPTS must be a non-negative integer, got '{}'",
                    value
                ))
            })?;
        }

        Ok(())
    }

    /// Validate the final configuration
    pub fn validate_config(config: &ContactsConfig) -> ConfigResult<()> {
        if config.store.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "store.path cannot be empty".to_string(),
            ));
        }

        if config.display.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "display.page_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("contacts.csv")
}
fn default_page_size() -> usize {
    5
}
fn default_max_attempts() -> u32 {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ContactsConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.store.path, PathBuf::from("contacts.csv"));
        assert_eq!(config.display.page_size, 5);
        assert_eq!(config.input.max_attempts, 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.toml");
        std::fs::write(&path, "[display]\npage_size = 2\n").unwrap();

        let config = ConfigManager::load_file(&path).unwrap();
        assert_eq!(config.display.page_size, 2);
        assert_eq!(config.store.path, PathBuf::from("contacts.csv"));
        assert_eq!(config.input.max_attempts, 5);
    }

    #[test]
    fn test_implicit_file_is_picked_up() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "[store]\npath = \"book.csv\"\n",
        )
        .unwrap();

        let config = ConfigManager::load_config(None, temp.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("book.csv"));
    }

    #[test]
    fn test_missing_implicit_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigManager::load_config(None, temp.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("contacts.csv"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            ConfigManager::load_config(Some(&missing), temp.path()),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.toml");
        std::fs::write(&path, "[display\npage_size = ").unwrap();

        assert!(matches!(
            ConfigManager::load_file(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ContactsConfig::default();
        ConfigManager::apply_env_overrides(
            &mut config,
            env(&[("CONTACTS_PAGE_SIZE", "12"), ("CONTACTS_MAX_ATTEMPTS", "0")]),
        )
        .unwrap();

        assert_eq!(config.display.page_size, 12);
        assert_eq!(config.input.max_attempts, 0);
    }

    #[test]
    fn test_env_override_must_be_numeric() {
        let mut config = ContactsConfig::default();
        let result =
            ConfigManager::apply_env_overrides(&mut config, env(&[("CONTACTS_PAGE_SIZE", "lots")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut config = ContactsConfig::default();
        config.display.page_size = 0;
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_store_path_is_rejected() {
        let mut config = ContactsConfig::default();
        config.store.path = PathBuf::new();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
