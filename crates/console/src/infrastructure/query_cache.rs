//! In-memory query cache adapter
//!
//! Implements [`QueryCachePort`] with a plain map guarded by an `RwLock`.
//! Cancellation is generation-based: every entry carries a fetch generation,
//! `cancel` bumps it, and commits from tickets issued before the bump are
//! refused. Invalidation marks entries stale but keeps their values
//! readable, so views keep rendering the old data while the refetch runs.
//!
//! UI integration goes through [`MemoryQueryCache::watch`]: every change
//! pushes a unit onto the watch channels, and the presentation layer bumps
//! an epoch signal from it.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use serde_json::Value;

use crate::ports::outbound::{FetchTicket, QueryCachePort, QueryKey};

#[derive(Default)]
struct Entry {
    value: Option<Value>,
    stale: bool,
    fetch_gen: u64,
}

#[derive(Default)]
pub struct MemoryQueryCache {
    entries: RwLock<HashMap<QueryKey, Entry>>,
    watchers: Mutex<Vec<UnboundedSender<()>>>,
}

impl MemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to change notifications. Every mutation sends one unit;
    /// dropped receivers are pruned on the next send.
    pub fn watch(&self) -> UnboundedReceiver<()> {
        let (tx, rx) = unbounded();
        match self.watchers.lock() {
            Ok(mut guard) => guard.push(tx),
            Err(poisoned) => poisoned.into_inner().push(tx),
        }
        rx
    }

    fn notify(&self) {
        let mut guard = match self.watchers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.retain(|tx| tx.unbounded_send(()).is_ok());
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<QueryKey, Entry>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<QueryKey, Entry>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl QueryCachePort for MemoryQueryCache {
    fn get(&self, key: &QueryKey) -> Option<Value> {
        self.read().get(key).and_then(|e| e.value.clone())
    }

    fn set(&self, key: &QueryKey, value: Value) {
        {
            let mut entries = self.write();
            let entry = entries.entry(key.clone()).or_default();
            entry.value = Some(value);
            entry.stale = false;
        }
        self.notify();
    }

    fn invalidate(&self, prefix: &QueryKey) {
        let mut changed = false;
        {
            let mut entries = self.write();
            for (key, entry) in entries.iter_mut() {
                if key.starts_with(prefix) && entry.value.is_some() && !entry.stale {
                    entry.stale = true;
                    changed = true;
                }
            }
        }
        if changed {
            self.notify();
        }
    }

    fn cancel(&self, key: &QueryKey) {
        let mut entries = self.write();
        entries.entry(key.clone()).or_default().fetch_gen += 1;
    }

    fn is_stale(&self, key: &QueryKey) -> bool {
        self.read().get(key).map(|e| e.stale).unwrap_or(true)
    }

    fn begin_fetch(&self, key: &QueryKey) -> FetchTicket {
        let entries = self.read();
        let generation = entries.get(key).map(|e| e.fetch_gen).unwrap_or(0);
        FetchTicket {
            key: key.clone(),
            generation,
        }
    }

    fn try_commit(&self, ticket: &FetchTicket, value: Value) -> bool {
        let committed = {
            let mut entries = self.write();
            let entry = entries.entry(ticket.key.clone()).or_default();
            if entry.fetch_gen != ticket.generation {
                false
            } else {
                entry.value = Some(value);
                entry.stale = false;
                true
            }
        };
        if committed {
            self.notify();
        }
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_makes_an_entry_fresh_and_readable() {
        let cache = MemoryQueryCache::new();
        let key = QueryKey::ad(1);
        assert!(cache.is_stale(&key));
        cache.set(&key, json!({"id": 1}));
        assert_eq!(cache.get(&key), Some(json!({"id": 1})));
        assert!(!cache.is_stale(&key));
    }

    #[test]
    fn invalidation_marks_stale_but_keeps_the_value() {
        let cache = MemoryQueryCache::new();
        let page_one = QueryKey::ads().child("1");
        let page_two = QueryKey::ads().child("2");
        let detail = QueryKey::ad(5);
        cache.set(&page_one, json!([1]));
        cache.set(&page_two, json!([2]));
        cache.set(&detail, json!({"id": 5}));

        cache.invalidate(&QueryKey::ads());

        assert!(cache.is_stale(&page_one));
        assert!(cache.is_stale(&page_two));
        assert!(!cache.is_stale(&detail));
        // Stale values stay readable until the refetch lands.
        assert_eq!(cache.get(&page_one), Some(json!([1])));
    }

    #[test]
    fn cancel_refuses_tickets_issued_before_it() {
        let cache = MemoryQueryCache::new();
        let key = QueryKey::ad(7);
        let stale_ticket = cache.begin_fetch(&key);
        cache.cancel(&key);
        cache.set(&key, json!({"status": "approved"}));

        assert!(!cache.try_commit(&stale_ticket, json!({"status": "pending"})));
        assert_eq!(cache.get(&key), Some(json!({"status": "approved"})));

        // A fetch started after the cancel commits normally.
        let fresh_ticket = cache.begin_fetch(&key);
        assert!(cache.try_commit(&fresh_ticket, json!({"status": "rejected"})));
        assert_eq!(cache.get(&key), Some(json!({"status": "rejected"})));
    }

    #[test]
    fn commits_clear_staleness() {
        let cache = MemoryQueryCache::new();
        let key = QueryKey::stats("summary");
        cache.set(&key, json!({"totalReviewed": 1}));
        cache.invalidate(&key);
        assert!(cache.is_stale(&key));

        let ticket = cache.begin_fetch(&key);
        assert!(cache.try_commit(&ticket, json!({"totalReviewed": 2})));
        assert!(!cache.is_stale(&key));
    }

    #[test]
    fn watchers_see_every_mutation() {
        let cache = MemoryQueryCache::new();
        let mut rx = cache.watch();
        let key = QueryKey::ad(1);
        cache.set(&key, json!({}));
        cache.invalidate(&key);
        assert_eq!(rx.try_next().ok().flatten(), Some(()));
        assert_eq!(rx.try_next().ok().flatten(), Some(()));
    }
}
