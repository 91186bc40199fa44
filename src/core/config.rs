use crate::core::dirs::get_config_directory;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const REMOTE_ENV_VAR: &str = "NEUROMANCER_REMOTE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Immutable settings built once at startup and handed to the workflow and validator
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Remote probed for authorization and pushed to
    pub remote_name: String,
    pub connectivity_url: String,
    pub connectivity_timeout_secs: u64,
    /// Pause between consecutive workflow steps
    pub operation_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remote_name: "origin".to_string(),
            connectivity_url: "https://www.google.com".to_string(),
            connectivity_timeout_secs: 5,
            operation_delay_ms: 1000,
        }
    }
}

impl Settings {
    /// Settings from the user config file plus environment overrides.
    /// A broken config file is logged and ignored.
    pub fn load() -> Self {
        let config_file = get_config_directory().join(CONFIG_FILE_NAME);
        let settings = match Self::load_from(&config_file) {
            Ok(Some(settings)) => {
                log::debug!("Loaded settings from {}", config_file.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        };
        settings.with_env_overrides(std::env::var(REMOTE_ENV_VAR).ok())
    }

    /// `Ok(None)` when the file does not exist
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(settings))
    }

    pub fn with_env_overrides(mut self, remote: Option<String>) -> Self {
        if let Some(remote) = remote.filter(|r| !r.trim().is_empty()) {
            self.remote_name = remote.trim().to_string();
        }
        self
    }

    pub fn connectivity_timeout(&self) -> Duration {
        Duration::from_secs(self.connectivity_timeout_secs)
    }

    pub fn operation_delay(&self) -> Duration {
        Duration::from_millis(self.operation_delay_ms)
    }
}
