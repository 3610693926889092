use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration file, read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".needs-attention.yaml";

/// Prefix of environment variable overrides, e.g. `NEEDS_ATTENTION_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "NEEDS_ATTENTION_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("GitHub API URL cannot be empty")]
    EmptyApiUrl,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `.needs-attention.yaml` when `path` is `None` (optional)
    /// 3. Environment variables (`NEEDS_ATTENTION_*`, `__` separates sections)
    ///
    /// Command-line flags are applied on top by the caller.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if path.is_some() && !file.exists() {
            anyhow::bail!("Config file not found: {}", file.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load configuration (file: {})", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.github.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.github.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com/graphql");
        assert_eq!(config.github.timeout_secs, 30);
        assert!(config.github.token.is_none());
        assert!(config.filter.ignore_labels.is_empty());
        assert!(!config.filter.assignment_override);
        assert_eq!(config.logging.level, "warn");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
github:
  timeout_secs: 10
filter:
  ignore_labels: [snooze, wontfix]
  assignment_override: true
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.github.timeout_secs, 10);
        assert_eq!(config.github.api_url, "https://api.github.com/graphql");
        assert_eq!(config.filter.ignore_labels, vec!["snooze", "wontfix"]);
        assert!(config.filter.assignment_override);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.rotation, "daily");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_yaml("filter:\n  ignore_labels: [question]\n");
        temp_env::with_vars_unset(["NEEDS_ATTENTION_FILTER__ASSIGNMENT_OVERRIDE"], || {
            let config = ConfigLoader::load(Some(file.path())).unwrap();
            assert_eq!(config.filter.ignore_labels, vec!["question"]);
            assert!(!config.filter.assignment_override);
        });
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = ConfigLoader::load(Some(Path::new("/nonexistent/needs-attention.yaml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_env_override() {
        let file = write_yaml("logging:\n  level: info\n  format: json\n");
        temp_env::with_vars(
            [
                ("NEEDS_ATTENTION_LOGGING__LEVEL", Some("debug")),
                ("NEEDS_ATTENTION_FILTER__ASSIGNMENT_OVERRIDE", Some("true")),
            ],
            || {
                let config = ConfigLoader::load(Some(file.path())).unwrap();
                assert_eq!(config.logging.level, "debug", "Env should win over file");
                assert_eq!(
                    config.logging.format, "json",
                    "File value should persist when not overridden"
                );
                assert!(config.filter.assignment_override);
            },
        );
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "verbose"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_validate_invalid_rotation() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidRotation(_))
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.github.timeout_secs = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn test_validate_empty_api_url() {
        let mut config = Config::default();
        config.github.api_url = "  ".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyApiUrl)
        ));
    }
}
