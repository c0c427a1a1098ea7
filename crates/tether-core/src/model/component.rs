// Actuator and deployment state

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::id::EntityId;
use super::Keyed;

/// Deployment state of an actuator on its target device.
///
/// `Loading` and `Unknown` are UI-transient: `Loading` marks an item
/// whose state has not been fetched yet, `Unknown` marks a failed fetch.
/// The remaining values come from the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentState {
    /// State fetch in flight; shown as a spinner by front ends.
    #[default]
    Loading,
    /// State could not be determined.
    Unknown,
    Ready,
    NotReady,
    Deployed,
    Running,
}

impl ComponentState {
    /// Parse a backend state string, mapping anything unrecognized to
    /// `Unknown` rather than failing the whole refresh.
    pub fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }
}

/// A registered actuator.
///
/// `state` is a transient decoration: it is attached when the actuator
/// enters the store (`Loading`), patched by the poll task, and never
/// sent back to the backend.
#[derive(Debug, Clone, Serialize)]
pub struct Actuator {
    pub id: EntityId,
    pub name: String,
    pub component_type: Option<String>,
    pub adapter_id: Option<EntityId>,
    pub device_id: Option<EntityId>,
    #[serde(skip)]
    pub state: ComponentState,
}

impl Keyed for Actuator {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
