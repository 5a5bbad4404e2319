// crates/tracker-core/src/config.rs - Configuration System
//
// The trackers have a single configurable concern: how many records each
// collection accepts.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--max-projects, --max-comments, --max-tasks)
// 2. Config file passed with --config
// 3. Built-in defaults
//
// EXAMPLE FILE:
// ```toml
// [limits]
// max_projects = 100
// max_comments = 100
// max_tasks = 10000
// ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::record::DEFAULT_MAX_COMMENTS;

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

/// Complete configuration schema for the trackers
///
/// Every section and field has a default, so a partial file (or an empty
/// one) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Collection size limits
    #[serde(default)]
    pub limits: Limits,
}

/// Maximum record counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Projects held by the project tracker
    #[serde(default = "default_max_projects")]
    pub max_projects: usize,

    /// Comments held by a single project
    #[serde(default = "default_max_comments")]
    pub max_comments: usize,

    /// Tasks held by the task tracker
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

fn default_max_projects() -> usize {
    100
}
fn default_max_comments() -> usize {
    DEFAULT_MAX_COMMENTS
}
fn default_max_tasks() -> usize {
    10_000
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_projects: default_max_projects(),
            max_comments: default_max_comments(),
            max_tasks: default_max_tasks(),
        }
    }
}

/// Loads, validates and renders configuration
pub struct ConfigManager;

impl ConfigManager {
    /// Read and validate a TOML config file
    pub fn load_from_file(path: &Path) -> ConfigResult<TrackerConfig> {
        let config = Self::read_from_file(path)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Read and parse a configuration file without validating it, for callers
    /// that still layer overrides on top
    pub fn read_from_file(path: &Path) -> ConfigResult<TrackerConfig> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse TOML text; `file` only labels parse errors
    pub fn parse(content: &str, file: &str) -> ConfigResult<TrackerConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: file.to_string(),
            error: e.to_string(),
        })
    }

    /// Reject limits that would make a tracker unusable
    pub fn validate_config(config: &TrackerConfig) -> ConfigResult<()> {
        let limits = &config.limits;
        for (name, value) in [
            ("max_projects", limits.max_projects),
            ("max_comments", limits.max_comments),
            ("max_tasks", limits.max_tasks),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "limits.{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Render a configuration as TOML
    pub fn to_toml_string(config: &TrackerConfig) -> ConfigResult<String> {
        toml::to_string_pretty(config)
            .map_err(|e| ConfigError::ValidationError(format!("Cannot serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.limits.max_projects, 100);
        assert_eq!(config.limits.max_comments, 100);
        assert_eq!(config.limits.max_tasks, 10_000);
    }

    #[test]
    fn test_config_serialization() {
        let config = TrackerConfig {
            limits: Limits {
                max_projects: 5,
                max_comments: 7,
                max_tasks: 9,
            },
        };
        let toml = ConfigManager::to_toml_string(&config).unwrap();
        let parsed = ConfigManager::parse(&toml, "inline").unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = ConfigManager::parse("[limits]\nmax_tasks = 3\n", "inline").unwrap();
        assert_eq!(config.limits.max_tasks, 3);
        assert_eq!(config.limits.max_projects, 100);

        let empty = ConfigManager::parse("", "inline").unwrap();
        assert_eq!(empty, TrackerConfig::default());
    }

    #[test]
    fn test_zero_limit_validation() {
        let mut config = TrackerConfig::default();
        config.limits.max_comments = 0;
        let err = ConfigManager::validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("limits.max_comments"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ConfigManager::parse("[limits\n", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref file, .. } if file == "broken.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "[limits]\nmax_projects = 2\n").unwrap();

        let config = ConfigManager::load_from_file(&path).unwrap();
        assert_eq!(config.limits.max_projects, 2);

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            ConfigManager::load_from_file(&missing),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_read_from_file_skips_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "[limits]\nmax_projects = 0\n").unwrap();

        let config = ConfigManager::read_from_file(&path).unwrap();
        assert_eq!(config.limits.max_projects, 0);
        assert!(matches!(
            ConfigManager::load_from_file(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
