// Rule trigger

use serde::Serialize;

use super::id::EntityId;
use super::Keyed;

/// A rule trigger: a named CEP query that fires rule actions when its
/// condition matches the event stream.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTrigger {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub query: String,
}

impl Keyed for RuleTrigger {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
