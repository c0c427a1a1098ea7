// Adapter and deployment parameters

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::id::EntityId;
use super::Keyed;

/// Value kind of a deployment parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ParameterKind {
    Text,
    Number,
    Switch,
}

/// A deployment parameter declared by an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub unit: String,
    pub mandatory: bool,
}

impl Parameter {
    /// The switch every adapter must carry; it controls whether the
    /// emitted data is anonymized.
    pub fn noisy_data() -> Self {
        Self {
            name: "noisy_data".into(),
            kind: ParameterKind::Switch,
            unit: String::new(),
            mandatory: true,
        }
    }
}

/// An adapter: the deployable binding between a device and the platform.
/// Its service and routine files live server-side; only their names are
/// carried here.
#[derive(Debug, Clone, Serialize)]
pub struct Adapter {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub parameters: Vec<Parameter>,
    pub routine_names: Vec<String>,
}

impl Keyed for Adapter {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
