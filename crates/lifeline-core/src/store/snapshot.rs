// ── Reactive entity list ──
//
// Holds the last successful full load for one page. Lists are only
// ever replaced wholesale; there is no per-record mutation.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::Entity;

/// Snapshot of one entity type with push-based change notification.
///
/// Every replacement bumps a version counter and broadcasts the new
/// snapshot to subscribers.
pub struct EntityList<T: Entity> {
    /// Version counter, bumped on every replacement.
    version: watch::Sender<u64>,

    /// Full snapshot in server order.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Entity> EntityList<T> {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self { version, snapshot }
    }

    /// Replace the whole list with a fresh load.
    pub fn replace(&self, items: Vec<T>) {
        let values: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
        self.version.send_modify(|v| *v += 1);
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    /// Look up a record by canonical id.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.snapshot
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }
}

impl<T: Entity> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}
