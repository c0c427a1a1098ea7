// API error types
//
// Transport-layer and protocol-layer failures. `tether-core` translates
// these into domain-appropriate variants; consumers of the core crate
// never see raw reqwest errors.

use thiserror::Error;

/// Unified error type for the API crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend rejected the request (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// True for failures worth retrying on the next scheduled poll tick
    /// (connection-level problems, not protocol rejections).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
