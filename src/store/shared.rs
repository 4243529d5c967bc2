// src/store/shared.rs

use crate::domain::{BidRecord, FilterSpec};
use crate::store::bid_store::{BidStore, StoreEvent, SubscriptionId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to the session's store. Every call holds the lock for one
/// whole mutation (recompute and listener notification included), so two
/// mutations never interleave.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<BidStore>>,
}

impl SharedStore {
    pub fn new(store: BidStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn set_records(&self, records: Vec<BidRecord>) {
        self.inner.lock().set_records(records);
    }

    pub fn set_filter(&self, filter: FilterSpec) {
        self.inner.lock().set_filter(filter);
    }

    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut store = self.inner.lock();
        store.toggle_favorite(id);
        store.is_favorite(id)
    }

    /// The listener stays registered until the returned handle is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StoreEvent, &BidStore) + Send + Sync + 'static,
    {
        let id = self.inner.lock().subscribe(listener);
        Subscription {
            store: self.clone(),
            id,
        }
    }

    /// Runs `f` against a consistent snapshot of the store.
    pub fn read<T>(&self, f: impl FnOnce(&BidStore) -> T) -> T {
        let store = self.inner.lock();
        f(&*store)
    }

    pub fn filtered(&self) -> Vec<BidRecord> {
        self.read(|s| s.filtered().to_vec())
    }

    #[cfg(test)]
    pub fn records(&self) -> Vec<BidRecord> {
        self.read(|s| s.records().to_vec())
    }

    #[cfg(test)]
    pub fn filter(&self) -> FilterSpec {
        self.read(|s| s.filter().clone())
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.read(|s| s.is_favorite(id))
    }

    pub fn find(&self, id: &str) -> Option<BidRecord> {
        self.read(|s| s.find(id).cloned())
    }
}

/// Registration handle returned by [`SharedStore::subscribe`]. Must not be
/// dropped from inside a listener, the store is locked there.
#[must_use = "dropping the subscription removes the listener"]
pub struct Subscription {
    store: SharedStore,
    id: SubscriptionId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.store.inner.lock().unsubscribe(self.id);
    }
}
