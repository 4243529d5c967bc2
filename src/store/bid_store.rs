// src/store/bid_store.rs

use crate::domain::{apply_filters, BidRecord, FilterSpec};
use std::collections::HashSet;
use tracing::debug;

/// What changed, delivered to listeners after the store is consistent again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    RecordsReplaced { count: usize },
    FilterChanged,
    FavoriteToggled { id: String, favorite: bool },
    #[cfg(test)]
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreEvent, &BidStore) + Send + Sync>;

/// Holds the bid collection, the active filter, the derived filtered view
/// and the favorite set. `filtered` is recomputed in full whenever the
/// records or the filter change, so it always equals
/// `apply_filters(records, filter)`.
#[derive(Default)]
pub struct BidStore {
    records: Vec<BidRecord>,
    filter: FilterSpec,
    filtered: Vec<BidRecord>,
    favorites: HashSet<String>,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl BidStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<BidRecord>) -> Self {
        let mut store = Self::new();
        store.set_records(records);
        store
    }

    /// Replaces the whole collection; nothing from the previous one survives.
    pub fn set_records(&mut self, records: Vec<BidRecord>) {
        self.records = records;
        self.recompute();
        debug!(
            records = self.records.len(),
            visible = self.filtered.len(),
            "bid records replaced"
        );
        self.notify(StoreEvent::RecordsReplaced {
            count: self.records.len(),
        });
    }

    /// Stores `filter` verbatim. The previous filter is discarded, not merged.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.recompute();
        debug!(filter = ?self.filter, visible = self.filtered.len(), "filter applied");
        self.notify(StoreEvent::FilterChanged);
    }

    /// Flips membership of `id`. Unknown ids are accepted.
    pub fn toggle_favorite(&mut self, id: &str) {
        let favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        self.notify(StoreEvent::FavoriteToggled {
            id: id.to_string(),
            favorite,
        });
    }

    pub fn records(&self) -> &[BidRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[BidRecord] {
        &self.filtered
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn find(&self, id: &str) -> Option<&BidRecord> {
        self.records.iter().find(|b| b.id == id)
    }

    /// Back to an empty store between test cases. Listeners stay registered.
    #[cfg(test)]
    pub fn reset(&mut self) {
        self.records.clear();
        self.filter = FilterSpec::default();
        self.filtered.clear();
        self.favorites.clear();
        debug!("bid store reset");
        self.notify(StoreEvent::Reset);
    }

    /// Listeners run synchronously after each mutation, while the caller
    /// still holds the store. They must not try to mutate it.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent, &BidStore) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.records, &self.filter);
    }

    fn notify(&self, event: StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(&event, self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::tests::{bid, scenario_bids};
    use std::sync::{Arc, Mutex};

    fn ids(bids: &[BidRecord]) -> Vec<&str> {
        bids.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = BidStore::new();
        assert!(store.records().is_empty());
        assert!(store.filtered().is_empty());
        assert!(store.filter().is_empty());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn set_records_recomputes_under_current_filter() {
        let mut store = BidStore::new();
        store.set_filter(FilterSpec {
            budget_min: Some(400_000_000),
            ..Default::default()
        });
        store.set_records(scenario_bids());

        assert_eq!(store.records().len(), 2);
        assert_eq!(ids(store.filtered()), vec!["1"]);
    }

    #[test]
    fn replace_supersedes_previous_collection() {
        let mut store = BidStore::with_records(scenario_bids());
        store.set_filter(FilterSpec {
            category: Some("SW".to_string()),
            ..Default::default()
        });

        let replacement = vec![
            bid("7", "Bridge Repair", "Busan City", "Construction", "Busan", 10),
            bid("8", "Portal Upgrade", "Busan City", "SW", "Busan", 20),
        ];
        store.set_records(replacement.clone());

        assert_eq!(store.records(), replacement.as_slice());
        assert_eq!(ids(store.filtered()), vec!["8"]);
        assert!(store.find("1").is_none());
    }

    #[test]
    fn set_filter_replaces_instead_of_merging() {
        let mut store = BidStore::with_records(scenario_bids());
        store.set_filter(FilterSpec {
            region: Some("Seoul".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(store.filtered()), vec!["1"]);

        store.set_filter(FilterSpec {
            keyword: Some("data".to_string()),
            ..Default::default()
        });
        assert_eq!(store.filter().region, None);
        assert_eq!(ids(store.filtered()), vec!["2"]);

        store.set_filter(FilterSpec::default());
        assert_eq!(store.filtered(), store.records());
    }

    #[test]
    fn setting_the_same_filter_twice_is_idempotent() {
        let filter = FilterSpec {
            keyword: Some("gyeonggi".to_string()),
            ..Default::default()
        };
        let mut store = BidStore::with_records(scenario_bids());
        store.set_filter(filter.clone());
        let once = store.filtered().to_vec();
        store.set_filter(filter);
        assert_eq!(store.filtered(), once.as_slice());
        assert_eq!(ids(&once), vec!["2"]);
    }

    #[test]
    fn toggle_favorite_is_involutive() {
        let mut store = BidStore::with_records(scenario_bids());
        store.toggle_favorite("1");
        let before = store.favorites().clone();

        store.toggle_favorite("2");
        store.toggle_favorite("2");
        assert_eq!(store.favorites(), &before);

        store.toggle_favorite("1");
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn unknown_favorite_id_is_accepted_without_side_effects() {
        let mut store = BidStore::with_records(scenario_bids());
        let view = store.filtered().to_vec();

        store.toggle_favorite("9");

        assert!(store.is_favorite("9"));
        assert_eq!(store.favorites().len(), 1);
        assert_eq!(store.records(), scenario_bids().as_slice());
        assert_eq!(store.filtered(), view.as_slice());
    }

    #[test]
    fn listeners_see_consistent_state_after_each_mutation() {
        let seen: Arc<Mutex<Vec<(StoreEvent, usize)>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let mut store = BidStore::new();
        store.subscribe(move |event, store| {
            sink.lock().unwrap().push((event.clone(), store.filtered().len()));
        });

        store.set_records(scenario_bids());
        store.set_filter(FilterSpec {
            budget_min: Some(400_000_000),
            ..Default::default()
        });
        store.toggle_favorite("2");

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (StoreEvent::RecordsReplaced { count: 2 }, 2),
                (StoreEvent::FilterChanged, 1),
                (
                    StoreEvent::FavoriteToggled {
                        id: "2".to_string(),
                        favorite: true
                    },
                    1
                ),
            ]
        );
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);

        let mut store = BidStore::new();
        let id = store.subscribe(move |_, _| *counter.lock().unwrap() += 1);
        store.set_records(scenario_bids());

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_filter(FilterSpec::default());

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn reset_clears_state() {
        let seen: Arc<Mutex<Vec<(StoreEvent, usize)>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let mut store = BidStore::with_records(scenario_bids());
        store.toggle_favorite("1");
        store.set_filter(FilterSpec {
            region: Some("Seoul".to_string()),
            ..Default::default()
        });

        store.subscribe(move |event, store| {
            sink.lock().unwrap().push((event.clone(), store.records().len()));
        });

        store.reset();

        assert!(store.records().is_empty());
        assert!(store.filtered().is_empty());
        assert!(store.filter().is_empty());
        assert!(store.favorites().is_empty());
        assert_eq!(*seen.lock().unwrap(), vec![(StoreEvent::Reset, 0)]);
    }
}
