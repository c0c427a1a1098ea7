// Transport configuration
//
// Shared knobs for building the underlying `reqwest::Client`.

use std::time::Duration;

use crate::error::Error;

/// Transport-level settings applied to every request.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout.
    pub timeout: Duration,

    /// Accept self-signed / invalid TLS certificates.
    ///
    /// Platform installations on local networks commonly run with
    /// self-signed certificates, so this is exposed as a first-class
    /// toggle rather than buried in client construction.
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            accept_invalid_certs: false,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;
        Ok(client)
    }
}
