use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};

/// Runtime settings, read from `~/.contact-form/config.yaml`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Absolute URL submissions are POSTed to
    pub endpoint: String,
    /// Request timeout; `None` keeps the HTTP client's default
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load from the default location, then apply the environment override
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
        Ok(config)
    }

    /// Load from a specific file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_yaml::from_str::<Config>(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join("config.yaml")
    }

    /// Replace the endpoint when the override is set and non-empty
    pub fn apply_endpoint_override(&mut self, value: Option<String>) {
        if let Some(endpoint) = value.filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "endpoint: http://localhost:8080/contact\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/contact");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_load_timeout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "timeout_secs: 10\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, Some(10));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "timeout_secs: [not a number\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_endpoint_override() {
        let mut config = Config::default();
        config.apply_endpoint_override(Some(String::from("  ")));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        config.apply_endpoint_override(None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        config.apply_endpoint_override(Some(String::from("https://example.test/api")));
        assert_eq!(config.endpoint, "https://example.test/api");
    }
}
