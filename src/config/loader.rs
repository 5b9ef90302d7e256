use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::FeedConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl FeedConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/looks-feed/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("looks-feed").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `FeedConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(FeedConfig::default());
        }

        Self::load_from(&path)
    }

    /// Reads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: FeedConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The source location is not blank
    /// - Both asset extensions are set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.location.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.location must not be empty".to_string(),
            });
        }

        for (field, value) in [
            ("assets.video_extension", &self.assets.video_extension),
            ("assets.image_extension", &self.assets.image_extension),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must not be empty", field),
                });
            }
        }

        Ok(())
    }
}
