//! Maps opaque media names from the feed onto bundled files.

use std::path::PathBuf;

use crate::config::AssetConfig;

/// Resolves `compressed_for_ios_url` / `profile_picture_url` values.
///
/// With an asset directory configured, `{dir}/{name}.{ext}` is returned
/// when that file exists. Every other case passes the name through
/// untouched, so resolution never fails.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    dir: Option<PathBuf>,
    video_extension: String,
    image_extension: String,
}

impl ResourceResolver {
    pub fn from_config(assets: &AssetConfig) -> Self {
        Self {
            dir: assets.dir.clone(),
            video_extension: assets.video_extension.clone(),
            image_extension: assets.image_extension.clone(),
        }
    }

    pub fn video(&self, name: &str) -> String {
        self.resolve(name, &self.video_extension)
    }

    pub fn image(&self, name: &str) -> String {
        self.resolve(name, &self.image_extension)
    }

    fn resolve(&self, name: &str, extension: &str) -> String {
        let Some(dir) = self.dir.as_ref().filter(|_| !name.is_empty()) else {
            return name.to_string();
        };

        let candidate = dir.join(format!("{}.{}", name, extension));
        if candidate.is_file() {
            candidate.to_string_lossy().into_owned()
        } else {
            name.to_string()
        }
    }
}

impl Default for ResourceResolver {
    fn default() -> Self {
        Self::from_config(&AssetConfig::default())
    }
}
