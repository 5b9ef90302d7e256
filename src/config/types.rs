use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

/// Where the looks document lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Resource locator: `http(s)://...` for a network document,
    /// `file://...` or a bare path for a bundled one.
    #[serde(default = "default_location")]
    pub location: String,
}

/// Settings handed to the HTTP transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Bundled media lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory searched for `{name}.{extension}` files.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Extension appended to video resource names (default: "mp4").
    #[serde(default = "default_video_extension")]
    pub video_extension: String,
    /// Extension appended to profile picture names (default: "jpeg").
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
}

fn default_location() -> String {
    "assets/data.json".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_video_extension() -> String {
    "mp4".to_string()
}

fn default_image_extension() -> String {
    "jpeg".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            transport: TransportConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: None,
            video_extension: default_video_extension(),
            image_extension: default_image_extension(),
        }
    }
}
