use crate::mvi::Intent;

/// Fetch lifecycle events that drive [`FeedState`](super::FeedState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedIntent {
    FetchStarted,
    FetchSucceeded,
    FetchFailed,
}

impl Intent for FeedIntent {}
