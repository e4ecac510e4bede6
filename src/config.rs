//! Application configuration, loadable from TOML and overridden by the
//! command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::PlayerKind;
use crate::error::ConfigError;

/// Top-level settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub white: PlayerKind,
    pub blue: PlayerKind,
    /// Offer undo/redo/next before each turn.
    pub undo: bool,
    /// Show the current player's score components in the turn banner.
    pub score: bool,
    /// Seed for the scripted players. Drawn at random when absent.
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            white: PlayerKind::Human,
            blue: PlayerKind::Human,
            undo: false,
            score: false,
            seed: None,
            log_file: PathBuf::from("santorini.log"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation("log_file must not be empty".into()));
        }
        Ok(())
    }
}
