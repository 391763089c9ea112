//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use resumable_tictactoe::DEFAULT_SAVE_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Location of the single save slot.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// Whether markers are colored on the terminal.
    #[serde(default = "default_color")]
    color: bool,
}

fn default_save_path() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_FILE)
}

fn default_color() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            color: default_color(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(save_path = %config.save_path.display(), color = config.color, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, save_path: Option<PathBuf>, no_color: bool) -> Self {
        if let Some(path) = save_path {
            self.save_path = path;
        }
        if no_color {
            self.color = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = GameConfig::load_or_default(dir.path().join("absent.toml"))
            .expect("Load failed");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.save_path(), &PathBuf::from("game_state.txt"));
        assert!(*config.color());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("tictactoe.toml");
        std::fs::write(&path, "color = false\n").expect("Write failed");

        let config = GameConfig::load_or_default(&path).expect("Load failed");
        assert!(!*config.color());
        assert_eq!(config.save_path(), &PathBuf::from("game_state.txt"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("tictactoe.toml");
        std::fs::write(&path, "color = \"sometimes\"\n").expect("Write failed");

        let err = GameConfig::load_or_default(&path).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(Some(PathBuf::from("slot.txt")), true);
        assert_eq!(config.save_path(), &PathBuf::from("slot.txt"));
        assert!(!*config.color());

        let config = GameConfig::default().with_overrides(None, false);
        assert_eq!(config, GameConfig::default());
    }
}
