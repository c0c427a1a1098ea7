// ── Typed request structs for Command payloads ──
//
// The caller owns one of these as its mutable form draft, fills it in,
// and passes it by value into the create operation. Nothing here is
// retained by core after the command completes.

use serde::{Deserialize, Serialize};

use crate::model::{EntityId, Parameter};
use tether_api::FilePayload;

// ── Actuator ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActuatorRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    pub adapter_id: EntityId,
    pub device_id: EntityId,
}

// ── Adapter ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdapterRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Caller-defined deployment parameters. The mandatory `noisy_data`
    /// switch is appended automatically if missing.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub service_file: FilePayload,
    #[serde(default)]
    pub routine_files: Vec<FilePayload>,
}

// ── Rule trigger ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRuleTriggerRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub query: String,
}
