//! Configuration - YAML file plus built-in defaults

use crate::catalog::OptionCatalog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const LOCAL_CONFIG: &str = "marketpulse.yml";

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub catalog: OptionCatalog,
}

impl Config {
    /// Load config from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file to use.
    /// Priority:
    /// 1. explicit path (must exist)
    /// 2. ./marketpulse.yml
    /// 3. <config dir>/marketpulse/config.yml
    /// 4. built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new(LOCAL_CONFIG);
        if local.exists() {
            return Self::from_file(local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("marketpulse").join("config.yml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if self.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than zero");
        }
        self.catalog.validate().context("invalid option catalog")?;
        Ok(())
    }
}

/// Default log file for the dashboard, which cannot log to the terminal it draws on
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marketpulse")
        .join("marketpulse.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "api:\n  base_url: http://10.0.0.5:9000\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.catalog, OptionCatalog::default());
    }

    #[test]
    fn test_catalog_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(
            &path,
            "catalog:\n  experience_levels: [Junior, Mid-level, Senior]\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.catalog.experience_levels, vec!["Junior", "Mid-level", "Senior"]);
        assert_eq!(config.catalog.job_titles.len(), 10);
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "catalog:\n  locations: [Remote, Remote]\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate location 'Remote'"));
    }

    #[test]
    fn test_catalog_without_default_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "catalog:\n  job_titles: [Astronaut]\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("must contain the default 'Data Scientist'"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.yml"))).is_err());
    }
}
