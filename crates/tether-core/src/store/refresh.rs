// ── Refresh application logic ──
//
// Applies list snapshots and bulk state maps into the DataStore.

use std::collections::{HashMap, HashSet};

use chrono::Utc;

use super::DataStore;
use super::collection::EntityCollection;
use crate::model::{Actuator, Adapter, ComponentState, EntityId, Keyed, RuleTrigger};

/// Upsert all incoming entities, then prune any existing ids not in the
/// incoming set. This avoids the brief empty state that a clear-then-
/// insert approach would cause.
fn upsert_and_prune<T: Keyed + Send + Sync + 'static>(
    collection: &EntityCollection<T>,
    items: Vec<T>,
) {
    let incoming: HashSet<EntityId> = items.iter().map(|i| i.id().clone()).collect();
    for item in items {
        collection.upsert(item);
    }
    for existing in collection.ids() {
        if !incoming.contains(&existing) {
            collection.remove(&existing);
        }
    }
}

impl DataStore {
    /// Apply a full actuator list fetch.
    ///
    /// Already-known actuators keep their current state decoration;
    /// newly listed ones enter as `Loading` until the next state fetch.
    pub(crate) fn apply_actuators(&self, incoming: Vec<Actuator>) {
        let items = incoming
            .into_iter()
            .map(|mut a| {
                if let Some(existing) = self.actuators.get(&a.id) {
                    a.state = existing.state;
                }
                a
            })
            .collect();
        upsert_and_prune(&self.actuators, items);
    }

    pub(crate) fn apply_adapters(&self, incoming: Vec<Adapter>) {
        upsert_and_prune(&self.adapters, incoming);
    }

    pub(crate) fn apply_rule_triggers(&self, incoming: Vec<RuleTrigger>) {
        upsert_and_prune(&self.rule_triggers, incoming);
    }

    /// Patch a bulk state map onto the actuator collection.
    ///
    /// Every listed actuator gets the fetched state; actuators missing
    /// from the map go `Unknown` (the backend does not know them either).
    pub(crate) fn apply_state_map(&self, states: &HashMap<EntityId, ComponentState>) {
        self.actuators.map_in_place(|a| {
            let mut a = a.clone();
            a.state = states.get(&a.id).copied().unwrap_or(ComponentState::Unknown);
            a
        });
        self.last_state_refresh.send_replace(Some(Utc::now()));
    }

    /// Patch one actuator's state in place. No-op if the id is unknown
    /// (it may have been deleted while the fetch was in flight).
    pub(crate) fn apply_single_state(&self, id: &EntityId, state: ComponentState) {
        if let Some(existing) = self.actuators.get(id) {
            let mut updated = (*existing).clone();
            updated.state = state;
            self.actuators.upsert(updated);
        }
    }

    /// Mark every actuator's state `Unknown` after a failed bulk fetch.
    pub(crate) fn mark_all_states_unknown(&self) {
        self.actuators.map_in_place(|a| {
            let mut a = a.clone();
            a.state = ComponentState::Unknown;
            a
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn actuator(id: &str, state: ComponentState) -> Actuator {
        Actuator {
            id: EntityId::from(id),
            name: format!("act-{id}"),
            component_type: None,
            adapter_id: None,
            device_id: None,
            state,
        }
    }

    #[test]
    fn apply_actuators_prunes_stale_entries() {
        let store = DataStore::new();
        store.apply_actuators(vec![
            actuator("a1", ComponentState::Loading),
            actuator("a2", ComponentState::Loading),
        ]);
        store.apply_actuators(vec![actuator("a2", ComponentState::Loading)]);

        let snap = store.actuators_snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].id, EntityId::from("a2"));
    }

    #[test]
    fn apply_actuators_keeps_existing_state_decoration() {
        let store = DataStore::new();
        store.apply_actuators(vec![actuator("a1", ComponentState::Loading)]);
        store.apply_single_state(&EntityId::from("a1"), ComponentState::Running);

        // A re-list delivers the entity without state; decoration survives.
        store.apply_actuators(vec![actuator("a1", ComponentState::Loading)]);
        assert_eq!(
            store.actuator(&EntityId::from("a1")).unwrap().state,
            ComponentState::Running
        );
    }

    #[test]
    fn state_map_patches_listed_and_unknowns_missing() {
        let store = DataStore::new();
        store.apply_actuators(vec![
            actuator("a1", ComponentState::Loading),
            actuator("a2", ComponentState::Loading),
        ]);

        let mut states = HashMap::new();
        states.insert(EntityId::from("a1"), ComponentState::Deployed);
        store.apply_state_map(&states);

        assert_eq!(
            store.actuator(&EntityId::from("a1")).unwrap().state,
            ComponentState::Deployed
        );
        assert_eq!(
            store.actuator(&EntityId::from("a2")).unwrap().state,
            ComponentState::Unknown
        );
        assert!(store.last_state_refresh().is_some());
    }

    #[test]
    fn single_state_for_deleted_actuator_is_tolerated() {
        let store = DataStore::new();
        // A state fetch landing after deletion must not resurrect the item.
        store.apply_single_state(&EntityId::from("gone"), ComponentState::Running);
        assert!(store.actuators_snapshot().is_empty());
    }

    #[test]
    fn mark_all_unknown_covers_every_entry() {
        let store = DataStore::new();
        store.apply_actuators(vec![
            actuator("a1", ComponentState::Running),
            actuator("a2", ComponentState::Deployed),
        ]);

        store.mark_all_states_unknown();
        for a in store.actuators_snapshot().iter() {
            assert_eq!(a.state, ComponentState::Unknown);
        }
    }
}
