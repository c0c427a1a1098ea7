// Application settings and documentation metadata

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where the platform's message broker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BrokerLocation {
    Local,
    Remote,
}

/// Platform-wide settings edited on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub broker_location: BrokerLocation,
    /// Required when the broker is `Remote`.
    pub broker_address: Option<String>,
}

/// Metadata about the platform's REST documentation, displayed
/// alongside the settings.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentationMetadata {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}
