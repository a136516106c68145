use crate::api_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::data_paths::{self, DEFAULT_DATA_DIR};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Dashboard settings, read from YAML. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory holding one record per tracked key.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Environment variable the API key is read from.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_dir: default_data_dir(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_api_key_env() -> String {
    "CBORG_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads the explicit config if given, else the default config file if it
    /// exists, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match data_paths::default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        let key = std::env::var(&self.api_key_env).unwrap_or_default();
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!(
                "{} environment variable not set\n\nSet your API key with:\n  export {}=your-key-here",
                self.api_key_env,
                self.api_key_env
            );
        }
        Ok(key.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
