//! Per-entity use-case services over the document store.
//!
//! # Responsibility
//! - Validate input before any gateway call (no partial writes).
//! - Build/merge full records and persist them by wholesale replace.
//!
//! # Invariants
//! - Updates never patch: the service rewrites the entire record with a
//!   fresh `updated_at`.
//! - Persistence is best-effort by contract: a failed write is already
//!   logged by the gateway, and the caller sees truth on the next reload.

pub mod event_service;
pub mod goal_service;
pub mod habit_service;
pub mod journal_service;
pub mod mood_service;
pub mod task_service;

pub use event_service::{EventDraft, EventService};
pub use goal_service::{GoalDraft, GoalService};
pub use habit_service::{HabitDraft, HabitService};
pub use journal_service::{JournalDraft, JournalService};
pub use mood_service::MoodService;
pub use task_service::{TaskDraft, TaskService};

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before reaching the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required text field is empty or whitespace.
    MissingField(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for ServiceError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(())
}
