use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the config directory when set.
const CONFIG_DIR_VAR: &str = "ERRORVIEW_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "~/.config/errorview";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_RETRY_LABEL: &str = "Retry";
pub const DEFAULT_SIMULATED_ERROR: &str = "Network timeout occurred";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Display settings for the demo app. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub retry_label: String,
    pub simulated_error: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            retry_label: DEFAULT_RETRY_LABEL.to_string(),
            simulated_error: DEFAULT_SIMULATED_ERROR.to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: DisplayConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        Self::resolve_config_dir(CONFIG_DIR_VAR).join(CONFIG_FILE_NAME)
    }

    fn resolve_config_dir(override_var: &str) -> PathBuf {
        let dir = std::env::var(override_var)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
        PathBuf::from(shellexpand::tilde(&dir).as_ref())
    }
}
