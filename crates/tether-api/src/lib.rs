//! HTTP client for the tether platform backend.
//!
//! Wraps `reqwest::Client` with platform-specific URL construction and
//! envelope unwrapping. Endpoint methods are implemented as inherent
//! methods on [`RestClient`], split across one module per resource kind
//! (components, adapters, rule triggers, settings, reference data).
//!
//! Consumers receive raw wire DTOs ([`models`]); mapping to domain types
//! happens one layer up, in `tether-core`.

pub mod adapters;
pub mod client;
pub mod components;
pub mod error;
pub mod models;
pub mod reference;
pub mod settings;
pub mod transport;
pub mod triggers;

pub use client::RestClient;
pub use error::Error;
pub use models::FilePayload;
pub use transport::TransportConfig;
