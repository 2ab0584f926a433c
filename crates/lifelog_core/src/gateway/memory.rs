//! In-memory document store.
//!
//! Backs guest sessions and the test suites with the same contract the
//! HTTP store exposes, including its quirks: absent collections read as
//! `None`, replace-at-id creates, delete always reports success.

use crate::gateway::store::DocumentStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryState {
    collections: BTreeMap<String, BTreeMap<String, Value>>,
    next_key: u64,
}

/// Process-local document store with store-compatible semantics.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    state: Mutex<MemoryState>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoning panic cannot leave the map half-written; recover.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get_all(&self, collection: &str) -> Option<BTreeMap<String, Value>> {
        let state = self.state();
        state
            .collections
            .get(collection)
            .filter(|records| !records.is_empty())
            .cloned()
    }

    fn create(&self, collection: &str, record: &Value) -> Option<String> {
        let mut state = self.state();
        state.next_key += 1;
        let key = format!("-mem{:06}", state.next_key);
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.clone(), record.clone());
        Some(key)
    }

    fn replace(&self, collection: &str, id: &str, record: &Value) -> Option<Value> {
        let mut state = self.state();
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), record.clone());
        Some(record.clone())
    }

    fn remove(&self, collection: &str, id: &str) -> bool {
        let mut state = self.state();
        if let Some(records) = state.collections.get_mut(collection) {
            records.remove(id);
        }
        true
    }
}
