use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

use super::FetchError;

/// Resolved location of the looks document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Network document fetched with a GET.
    Remote(Url),
    /// JSON file shipped alongside the app.
    Bundled(PathBuf),
}

impl FeedSource {
    /// Turn a configured locator into a source.
    ///
    /// `http://` and `https://` locators are remote, `file://` locators and
    /// bare paths are bundled. Anything else cannot be requested and is
    /// reported as [`FetchError::Unknown`].
    pub fn parse(locator: &str) -> Result<Self, FetchError> {
        let locator = locator.trim();
        if locator.is_empty() {
            return Err(FetchError::unknown("empty resource locator"));
        }

        let Some((scheme, _)) = locator.split_once("://") else {
            return Ok(FeedSource::Bundled(PathBuf::from(locator)));
        };

        match scheme.to_ascii_lowercase().as_str() {
            "http" | "https" => Url::parse(locator)
                .map(FeedSource::Remote)
                .map_err(|e| FetchError::unknown(format!("invalid URL '{}': {}", locator, e))),
            "file" => Url::parse(locator)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .map(FeedSource::Bundled)
                .ok_or_else(|| FetchError::unknown(format!("invalid file URL '{}'", locator))),
            other => Err(FetchError::unknown(format!(
                "unsupported scheme '{}' in '{}'",
                other, locator
            ))),
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Remote(url) => write!(f, "{}", url),
            FeedSource::Bundled(path) => write!(f, "{}", path.display()),
        }
    }
}
