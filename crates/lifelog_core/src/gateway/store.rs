//! Raw document-store contract.

use serde_json::Value;
use std::collections::BTreeMap;

/// Collection-level access to the backing JSON document store.
///
/// The contract deliberately mirrors the remote store's REST surface:
/// full-collection point reads, server-keyed inserts, full-record replace
/// and delete by id. Implementations absorb their own transport failures
/// (logging them) so that every method is infallible at the type level:
/// `None`/`false` means "no data", whatever the cause.
pub trait DocumentStore {
    /// Fetches a whole collection as an id-to-record map.
    ///
    /// Returns `None` when the collection does not exist or the fetch
    /// failed. An existing collection is never empty in the remote store.
    fn get_all(&self, collection: &str) -> Option<BTreeMap<String, Value>>;

    /// Inserts a record and returns the store-assigned key, if any.
    fn create(&self, collection: &str, record: &Value) -> Option<String>;

    /// Replaces the record at `collection/id` wholesale, creating it when
    /// absent. Returns the stored record on success.
    fn replace(&self, collection: &str, id: &str, record: &Value) -> Option<Value>;

    /// Deletes `collection/id`. The remote store reports success even for
    /// ids that never existed, so `true` does not imply a record was there.
    fn remove(&self, collection: &str, id: &str) -> bool;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn get_all(&self, collection: &str) -> Option<BTreeMap<String, Value>> {
        (**self).get_all(collection)
    }

    fn create(&self, collection: &str, record: &Value) -> Option<String> {
        (**self).create(collection, record)
    }

    fn replace(&self, collection: &str, id: &str, record: &Value) -> Option<Value> {
        (**self).replace(collection, id, record)
    }

    fn remove(&self, collection: &str, id: &str) -> bool {
        (**self).remove(collection, id)
    }
}
