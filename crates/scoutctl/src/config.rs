//! CLI configuration.
//!
//! A small TOML file under the user config directory holds the chosen
//! provider and its API key. Environment variables override the file:
//! `STEAMSCOUT_PROVIDER` and `STEAMSCOUT_API_KEY`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_API_KEY: &str = "STEAMSCOUT_API_KEY";
const ENV_PROVIDER: &str = "STEAMSCOUT_PROVIDER";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// "openai" or "gemini".
    pub provider: String,
    pub api_key: Option<String>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_key: None,
        }
    }
}

impl ScoutConfig {
    /// Load from the default path, then apply environment overrides.
    /// A missing file is not an error - defaults apply.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid config file at {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path().context("could not determine config directory")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, text)
            .with_context(|| format!("failed to write config to {}", path.display()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(provider) = std::env::var(ENV_PROVIDER) {
            if !provider.trim().is_empty() {
                self.provider = provider.trim().to_string();
            }
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.trim().is_empty() {
                self.api_key = Some(key.trim().to_string());
            }
        }
    }
}

/// `<config dir>/steamscout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("steamscout").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_openai_with_no_key() {
        let config = ScoutConfig::default();
        assert_eq!(config.provider, "openai");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ScoutConfig {
            provider: "gemini".to_string(),
            api_key: Some("test-key-123".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = ScoutConfig::load_from(&path).unwrap();
        assert_eq!(loaded.provider, "gemini");
        assert_eq!(loaded.api_key.as_deref(), Some("test-key-123"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "provider = [broken").unwrap();
        assert!(ScoutConfig::load_from(&path).is_err());
    }
}
