// Reference data loaded once at connect time

use serde::Serialize;

use super::id::EntityId;

/// A registered component type (e.g. "Motor" for the ACTUATOR category).
#[derive(Debug, Clone, Serialize)]
pub struct ComponentType {
    pub id: EntityId,
    pub name: String,
    pub category: String,
}

/// A parameter type usable in adapter definitions.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterType {
    pub id: EntityId,
    pub name: String,
}
