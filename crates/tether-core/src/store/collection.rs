// ── Generic reactive entity collection ──
//
// Ordered, id-unique storage with push-based change notification via
// `watch` channels. Display order is insertion order; upserting an
// existing id replaces the entry in place without moving it.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use tokio::sync::watch;

use crate::model::{EntityId, Keyed};

/// A reactive, ordered collection for a single entity type.
///
/// Every mutation bumps a version counter and rebuilds the snapshot
/// that subscribers receive.
pub(crate) struct EntityCollection<T: Keyed + Send + Sync + 'static> {
    /// Primary storage, ordered by first insertion.
    entries: RwLock<IndexMap<EntityId, Arc<T>>>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Full snapshot, rebuilt on mutation for efficient subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Keyed + Send + Sync + 'static> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            entries: RwLock::new(IndexMap::new()),
            version,
            snapshot,
        }
    }

    /// Insert or update an entity. New ids are appended at the end;
    /// existing ids are replaced in place, keeping their position.
    /// Returns `true` if the id was new.
    pub(crate) fn upsert(&self, entity: T) -> bool {
        let is_new = {
            let mut entries = self.entries.write().expect("collection lock poisoned");
            entries
                .insert(entity.id().clone(), Arc::new(entity))
                .is_none()
        };
        self.rebuild_snapshot();
        self.bump_version();
        is_new
    }

    /// Remove an entity by id, preserving the order of the survivors.
    /// A no-op (and no notification) if the id is absent.
    pub(crate) fn remove(&self, id: &EntityId) -> Option<Arc<T>> {
        let removed = {
            let mut entries = self.entries.write().expect("collection lock poisoned");
            entries.shift_remove(id)
        };
        if removed.is_some() {
            self.rebuild_snapshot();
            self.bump_version();
        }
        removed
    }

    /// Look up an entity by id.
    pub(crate) fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.entries
            .read()
            .expect("collection lock poisoned")
            .get(id)
            .cloned()
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    /// Return all current ids, in display order.
    pub(crate) fn ids(&self) -> Vec<EntityId> {
        self.entries
            .read()
            .expect("collection lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().expect("collection lock poisoned").len()
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace every entry's value through a mapping function, keeping
    /// ids and order. Used for bulk state patching.
    pub(crate) fn map_in_place(&self, mut f: impl FnMut(&T) -> T) {
        {
            let mut entries = self.entries.write().expect("collection lock poisoned");
            for value in entries.values_mut() {
                *value = Arc::new(f(value));
            }
        }
        self.rebuild_snapshot();
        self.bump_version();
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Collect all values into a snapshot vec and broadcast it.
    fn rebuild_snapshot(&self) {
        let values: Vec<Arc<T>> = self
            .entries
            .read()
            .expect("collection lock poisoned")
            .values()
            .cloned()
            .collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }

    fn bump_version(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}
