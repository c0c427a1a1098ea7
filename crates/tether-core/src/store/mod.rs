// ── Central reactive data store ──
//
// Ordered, thread-safe storage for all platform domain entities.
// Mutations are broadcast to subscribers via `watch` channels.

pub(crate) mod collection;
mod refresh;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::{
    Actuator, Adapter, ComponentType, DocumentationMetadata, EntityId, ParameterType, RuleTrigger,
    Settings,
};
use crate::stream::EntityStream;
use collection::EntityCollection;

/// Central reactive store for all platform domain entities.
///
/// The three list collections preserve display order and are unique by
/// id. Settings, documentation metadata, and reference data are held in
/// plain `watch` cells -- they are single values, not lists.
pub struct DataStore {
    pub(crate) actuators: EntityCollection<Actuator>,
    pub(crate) adapters: EntityCollection<Adapter>,
    pub(crate) rule_triggers: EntityCollection<RuleTrigger>,
    pub(crate) settings: watch::Sender<Option<Settings>>,
    pub(crate) documentation: watch::Sender<Option<DocumentationMetadata>>,
    pub(crate) actuator_types: watch::Sender<Arc<Vec<ComponentType>>>,
    pub(crate) parameter_types: watch::Sender<Arc<Vec<ParameterType>>>,
    pub(crate) last_state_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (settings, _) = watch::channel(None);
        let (documentation, _) = watch::channel(None);
        let (actuator_types, _) = watch::channel(Arc::new(Vec::new()));
        let (parameter_types, _) = watch::channel(Arc::new(Vec::new()));
        let (last_state_refresh, _) = watch::channel(None);

        Self {
            actuators: EntityCollection::new(),
            adapters: EntityCollection::new(),
            rule_triggers: EntityCollection::new(),
            settings,
            documentation,
            actuator_types,
            parameter_types,
            last_state_refresh,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn actuators_snapshot(&self) -> Arc<Vec<Arc<Actuator>>> {
        self.actuators.snapshot()
    }

    pub fn adapters_snapshot(&self) -> Arc<Vec<Arc<Adapter>>> {
        self.adapters.snapshot()
    }

    pub fn rule_triggers_snapshot(&self) -> Arc<Vec<Arc<RuleTrigger>>> {
        self.rule_triggers.snapshot()
    }

    pub fn settings(&self) -> Option<Settings> {
        self.settings.borrow().clone()
    }

    pub fn documentation(&self) -> Option<DocumentationMetadata> {
        self.documentation.borrow().clone()
    }

    pub fn actuator_types(&self) -> Arc<Vec<ComponentType>> {
        self.actuator_types.borrow().clone()
    }

    pub fn parameter_types(&self) -> Arc<Vec<ParameterType>> {
        self.parameter_types.borrow().clone()
    }

    pub fn last_state_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_state_refresh.borrow()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn actuator(&self, id: &EntityId) -> Option<Arc<Actuator>> {
        self.actuators.get(id)
    }

    pub fn adapter(&self, id: &EntityId) -> Option<Arc<Adapter>> {
        self.adapters.get(id)
    }

    pub fn rule_trigger(&self, id: &EntityId) -> Option<Arc<RuleTrigger>> {
        self.rule_triggers.get(id)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_actuators(&self) -> EntityStream<Actuator> {
        EntityStream::new(self.actuators.subscribe())
    }

    pub fn subscribe_adapters(&self) -> EntityStream<Adapter> {
        EntityStream::new(self.adapters.subscribe())
    }

    pub fn subscribe_rule_triggers(&self) -> EntityStream<RuleTrigger> {
        EntityStream::new(self.rule_triggers.subscribe())
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
