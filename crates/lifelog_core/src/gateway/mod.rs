//! Persistence gateway over the remote JSON document store.
//!
//! # Responsibility
//! - Define the raw collection-level store contract (`DocumentStore`).
//! - Provide the HTTP implementation and an in-memory one for tests and
//!   guest sessions.
//! - Map raw JSON objects to typed records with user scoping (`records`).
//!
//! # Invariants
//! - Transport failures are logged and surface as `None`/`false`/empty;
//!   callers cannot distinguish "store down" from "no data", by contract.
//! - There is no retry, backoff, or server-side querying; every read is a
//!   full-collection fetch filtered client-side.

pub mod http;
pub mod memory;
pub mod records;
pub mod store;

pub use http::{GatewayError, HttpDocumentStore};
pub use memory::MemoryDocumentStore;
pub use records::{create_record, delete_record, list_for_user, replace_record, Record};
pub use store::DocumentStore;
