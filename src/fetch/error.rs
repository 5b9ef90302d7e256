use std::fmt;

use thiserror::Error;

/// Errors produced by a feed fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connectivity failure or non-success status.
    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport { status: Option<u16>, message: String },

    /// Payload did not match the looks document shape.
    #[error("Failed to decode looks payload: {source}")]
    Decoding {
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be constructed.
    #[error("Unable to build request: {message}")]
    Unknown { message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP {})", code)).unwrap_or_default()
}

/// Coarse classification of a [`FetchError`], cheap to copy into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Transport,
    Decoding,
    Unknown,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FetchErrorKind::Transport => "transport_error",
            FetchErrorKind::Decoding => "decoding_error",
            FetchErrorKind::Unknown => "unknown_error",
        })
    }
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Decoding { .. } => FetchErrorKind::Decoding,
            FetchError::Unknown { .. } => FetchErrorKind::Unknown,
        }
    }

    /// HTTP status, when the server answered with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn unknown(message: impl Into<String>) -> Self {
        FetchError::Unknown {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return FetchError::unknown(err.to_string());
        }
        FetchError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        FetchError::Decoding { source }
    }
}
