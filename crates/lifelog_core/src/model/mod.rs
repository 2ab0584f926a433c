//! Typed domain model for all tracked entity kinds.
//!
//! # Responsibility
//! - Define one strongly-typed record per collection in the document store.
//! - Keep wire-compatible field names (camelCase keys, kebab-case enum
//!   values) so records round-trip against existing store data.
//!
//! # Invariants
//! - Every record carries an opaque `String` id and a `user_id` owner key;
//!   neither is referentially enforced by the store.
//! - `created_at`/`updated_at` are ISO-8601 strings; updates replace the
//!   whole record, never patch it.

pub mod event;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod mood;
pub mod task;
pub mod user;

pub use event::Event;
pub use goal::Goal;
pub use habit::{Frequency, Habit};
pub use journal::JournalEntry;
pub use mood::{Mood, MoodEntry};
pub use task::{Priority, Task, TaskCategory};
pub use user::User;
