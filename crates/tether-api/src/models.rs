// Wire DTOs for the platform REST API
//
// These mirror the backend's JSON shapes verbatim (camelCase fields,
// string ids, state strings). Domain mapping lives in `tether-core`.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

// ── Response envelope ───────────────────────────────────────────────

/// Envelope used by the state and reference-data endpoints:
/// `{ "success": bool, "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

/// Single deployment state payload: `{ "content": "RUNNING" }`.
#[derive(Debug, Deserialize)]
pub struct StateContent {
    pub content: String,
}

// ── Actuators ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub adapter: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorCreateDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    pub adapter: String,
    pub device: String,
}

// ── Adapters ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDto>,
    /// File names of the deployment routines stored server-side.
    #[serde(default)]
    pub routines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterCreateDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub parameters: Vec<ParameterDto>,
    pub service_file: FilePayload,
    pub routines: Vec<FilePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub mandatory: bool,
}

/// A component that depends on an adapter and will be cascade-deleted
/// with it. Surfaced in delete confirmation prompts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsingComponentDto {
    pub name: String,
    /// Resource kind of the dependent ("actuator", "sensor", ...).
    pub component: String,
}

// ── Rule triggers ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTriggerDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTriggerCreateDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub query: String,
}

// ── Settings / documentation ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub broker_location: String,
    #[serde(rename = "brokerIPAddress", default)]
    pub broker_ip_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationMetadataDto {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ── Reference data ──────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTypeDto {
    pub id: String,
    pub name: String,
    /// Component category the type belongs to ("ACTUATOR", "SENSOR").
    pub component: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterTypeDto {
    pub id: String,
    pub name: String,
}

// ── File payloads ───────────────────────────────────────────────────

/// A file shipped inline with a create request, encoded as a base64
/// data URL -- the shape the backend's upload handler expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePayload {
    pub name: String,
    /// `data:application/octet-stream;base64,<...>`
    pub content: String,
}

impl FilePayload {
    /// Encode raw bytes into the data-URL form.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            name: name.into(),
            content: format!("data:application/octet-stream;base64,{encoded}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn file_payload_encodes_data_url() {
        let payload = FilePayload::from_bytes("routine.py", b"print('ok')\n");
        assert_eq!(payload.name, "routine.py");
        assert!(
            payload
                .content
                .starts_with("data:application/octet-stream;base64,")
        );
    }

    #[test]
    fn parameter_dto_uses_wire_field_names() {
        let dto = ParameterDto {
            name: "noisy_data".into(),
            kind: "Switch".into(),
            unit: String::new(),
            mandatory: true,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "Switch");
        assert_eq!(json["mandatory"], true);
    }

    #[test]
    fn settings_dto_round_trips_backend_field_names() {
        let json = serde_json::json!({
            "brokerLocation": "REMOTE",
            "brokerIPAddress": "10.0.0.7"
        });
        let dto: SettingsDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.broker_location, "REMOTE");
        assert_eq!(dto.broker_ip_address.as_deref(), Some("10.0.0.7"));
    }
}
