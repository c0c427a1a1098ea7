// Platform connection configuration
//
// Built by the consumer (CLI profile resolution) and handed to
// `Platform::new`. Core never reads config files itself.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Basic-auth credentials for the platform backend.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Everything `Platform` needs to reach and poll a backend.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Platform root URL (e.g. `http://platform:8080`).
    pub url: Url,

    /// Optional basic-auth credentials.
    pub credentials: Option<Credentials>,

    /// Accept self-signed TLS certificates.
    pub accept_invalid_certs: bool,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Interval of the background actuator state poll.
    /// `Duration::ZERO` disables the poll task (oneshot CLI mode).
    pub state_poll_interval: Duration,
}

impl PlatformConfig {
    /// Default poll interval for long-lived consumers.
    pub const DEFAULT_STATE_POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

    pub fn new(url: Url) -> Self {
        Self {
            url,
            credentials: None,
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
            state_poll_interval: Self::DEFAULT_STATE_POLL_INTERVAL,
        }
    }
}
