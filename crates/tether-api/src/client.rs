// Platform REST client
//
// Wraps `reqwest::Client` with platform-specific URL construction and
// response decoding. Endpoint modules (components, adapters, triggers,
// settings, reference) are implemented as inherent methods via separate
// files to keep this module focused on transport mechanics.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the platform's REST API.
///
/// Handles base-URL construction under `/api/`, optional basic
/// authentication, and JSON decoding with error-body capture. All
/// methods return decoded payloads -- HTTP status handling happens here,
/// not in the endpoint modules.
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<(String, SecretString)>,
}

impl RestClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the platform root (e.g. `http://platform:8080`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            credentials: None,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Used by tests and by callers that share a client across crates.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            credentials: None,
        }
    }

    /// Attach basic-auth credentials applied to every request.
    #[must_use]
    pub fn with_credentials(mut self, username: String, password: SecretString) -> Self {
        self.credentials = Some((username, password));
        self
    }

    /// The platform base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/{path}");
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((user, pass)) => builder.basic_auth(user, Some(pass.expose_secret())),
            None => builder,
        }
    }

    /// Send a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.apply_auth(self.http.get(url)).send().await?;
        Self::decode(resp).await
    }

    /// Send a POST request with a JSON body and decode the response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self.apply_auth(self.http.post(url).json(body)).send().await?;
        Self::decode(resp).await
    }

    /// Send a DELETE request, expecting an empty (or ignorable) body.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        let resp = self.apply_auth(self.http.delete(url)).send().await?;
        Self::check_status(&resp)?;
        Ok(())
    }

    /// Map error statuses, then decode the body as JSON.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        Self::check_status(&resp)?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    fn check_status(resp: &reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Authentication {
                message: format!("HTTP {status}"),
            }),
            StatusCode::NOT_FOUND => Err(Error::NotFound {
                path: resp.url().path().to_owned(),
            }),
            s if s.is_success() => Ok(()),
            s => Err(Error::Api {
                status: s.as_u16(),
                message: format!("unexpected status {s}"),
            }),
        }
    }
}
