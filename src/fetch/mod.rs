//! Single-shot retrieval of the looks document.
//!
//! A fetch issues exactly one request, with no retries or caching. The
//! engine decides when to call again.

mod client;
mod error;
mod source;

use std::future::Future;

use crate::model::Look;

pub use client::SourceFetcher;
pub use error::{FetchError, FetchErrorKind};
pub use source::FeedSource;

/// Anything that can produce a batch of looks.
///
/// Implementations must not panic on expected failures; every failure
/// mode is reported as a [`FetchError`].
pub trait FeedFetcher: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Look>, FetchError>> + Send;
}
