//! Feed configuration: TOML file under the user config directory.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AssetConfig, FeedConfig, SourceConfig, TransportConfig};
