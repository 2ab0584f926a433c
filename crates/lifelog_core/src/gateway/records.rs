//! Typed record access over the raw store.
//!
//! # Responsibility
//! - Bind each entity type to its collection name and owner key.
//! - Replace the store's untyped id-to-JSON maps with typed, user-scoped
//!   lists.
//!
//! # Invariants
//! - Scoping happens client-side after a full-collection fetch; the store
//!   itself cannot filter.
//! - Records that fail to decode are logged and skipped, never surfaced as
//!   a hard error (documented data-malformation policy).

use crate::gateway::store::DocumentStore;
use crate::model::{Event, Goal, Habit, JournalEntry, MoodEntry, Task};
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persistable, user-owned entity.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Store collection holding this entity kind.
    const COLLECTION: &'static str;

    fn record_id(&self) -> &str;
    fn assign_id(&mut self, id: String);
    fn owner_id(&self) -> &str;
}

macro_rules! impl_record {
    ($entity:ty, $collection:literal) => {
        impl Record for $entity {
            const COLLECTION: &'static str = $collection;

            fn record_id(&self) -> &str {
                &self.id
            }

            fn assign_id(&mut self, id: String) {
                self.id = id;
            }

            fn owner_id(&self) -> &str {
                &self.user_id
            }
        }
    };
}

impl_record!(Task, "tasks");
impl_record!(Event, "events");
impl_record!(JournalEntry, "journal-entries");
impl_record!(Goal, "goals");
impl_record!(Habit, "habits");
impl_record!(MoodEntry, "mood-entries");

/// Fetches the full collection and keeps only `user_id`'s records.
///
/// A failed or empty fetch yields an empty list; see the gateway contract.
pub fn list_for_user<T: Record, S: DocumentStore>(store: &S, user_id: &str) -> Vec<T> {
    let Some(map) = store.get_all(T::COLLECTION) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for (key, value) in map {
        match serde_json::from_value::<T>(value) {
            Ok(mut record) => {
                if record.record_id().is_empty() {
                    record.assign_id(key);
                }
                if record.owner_id() == user_id {
                    records.push(record);
                }
            }
            Err(err) => {
                warn!(
                    "event=record_decode collection={} key={key} status=skipped error={err}",
                    T::COLLECTION
                );
            }
        }
    }
    records
}

/// Inserts a record under a store-assigned key, returning that key.
///
/// Entity services do not use this path: they write at the record's own
/// client-generated id via [`replace_record`] so saves overwrite in place.
/// Push-key creation remains for records whose identity the store assigns
/// (the `users` collection).
pub fn create_record<T: Record, S: DocumentStore>(store: &S, record: &T) -> Option<String> {
    let value = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(err) => {
            error!(
                "event=record_encode collection={} status=error error={err}",
                T::COLLECTION
            );
            return None;
        }
    };
    store.create(T::COLLECTION, &value)
}

/// Overwrites the record at its own id. Returns whether the store accepted
/// the write; a `false` here is already logged by the store.
pub fn replace_record<T: Record, S: DocumentStore>(store: &S, record: &T) -> bool {
    let value = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(err) => {
            error!(
                "event=record_encode collection={} status=error error={err}",
                T::COLLECTION
            );
            return false;
        }
    };
    store
        .replace(T::COLLECTION, record.record_id(), &value)
        .is_some()
}

/// Deletes by id within the entity's collection.
pub fn delete_record<T: Record, S: DocumentStore>(store: &S, id: &str) -> bool {
    store.remove(T::COLLECTION, id)
}

#[cfg(test)]
mod tests {
    use super::{create_record, list_for_user};
    use crate::gateway::memory::MemoryDocumentStore;
    use crate::gateway::store::DocumentStore;
    use crate::model::{Priority, Task, TaskCategory};
    use serde_json::json;

    fn task(id: &str, user_id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: None,
            completed: false,
            priority: Priority::Medium,
            category: TaskCategory::Personal,
            due_date: None,
            created_at: "2024-06-01T08:00:00.000+00:00".to_string(),
            updated_at: "2024-06-01T08:00:00.000+00:00".to_string(),
        }
    }

    #[test]
    fn list_scopes_by_owner() {
        let store = MemoryDocumentStore::new();
        create_record(&store, &task("t1", "alice", "mine")).unwrap();
        create_record(&store, &task("t2", "bob", "not mine")).unwrap();

        let mine: Vec<Task> = list_for_user(&store, "alice");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "mine");
    }

    #[test]
    fn undecodable_records_are_skipped() {
        let store = MemoryDocumentStore::new();
        create_record(&store, &task("t1", "alice", "good")).unwrap();
        store.create("tasks", &json!({"title": 42}));

        let records: Vec<Task> = list_for_user(&store, "alice");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn store_key_fills_missing_embedded_id() {
        let store = MemoryDocumentStore::new();
        let key = create_record(&store, &task("", "alice", "keyless")).unwrap();

        let records: Vec<Task> = list_for_user(&store, "alice");
        assert_eq!(records[0].id, key);
    }
}
