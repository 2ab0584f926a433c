//! Goal use-case service.

use crate::gateway::{delete_record, list_for_user, replace_record, DocumentStore};
use crate::model::Goal;
use crate::service::{require_text, ServiceError};
use crate::session::SessionContext;

/// Fields a caller supplies when creating a goal.
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub target_value: f64,
    pub unit: String,
    pub category: String,
    pub deadline: Option<String>,
}

pub struct GoalService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> GoalService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, ctx: &SessionContext) -> Vec<Goal> {
        list_for_user(&self.store, &ctx.user_id)
    }

    /// Creates a goal with zero progress.
    pub fn create(&self, ctx: &SessionContext, draft: GoalDraft) -> Result<Goal, ServiceError> {
        require_text("title", &draft.title)?;

        let now = ctx.timestamp();
        let goal = Goal {
            id: ctx.record_id(),
            user_id: ctx.user_id.clone(),
            title: draft.title,
            description: draft.description,
            target_value: draft.target_value,
            current_value: 0.0,
            unit: draft.unit,
            category: draft.category,
            deadline: draft.deadline,
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        };
        replace_record(&self.store, &goal);
        Ok(goal)
    }

    /// Persists a directly edited goal wholesale.
    ///
    /// Unlike [`update_progress`](Self::update_progress) this path does NOT
    /// re-clamp `current_value` or touch `completed`; an edit can push
    /// progress past 100% and it stays there until the next increment.
    pub fn save(&self, ctx: &SessionContext, goal: &Goal) -> Result<Goal, ServiceError> {
        require_text("title", &goal.title)?;

        let mut updated = goal.clone();
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        Ok(updated)
    }

    /// Applies a progress reading: clamps the stored value into
    /// `[0, target_value]` and derives `completed` from the UNclamped
    /// reading (`new_value >= target_value`).
    pub fn update_progress(&self, ctx: &SessionContext, goal: &Goal, new_value: f64) -> Goal {
        let mut updated = goal.clone();
        updated.current_value = new_value.min(goal.target_value).max(0.0);
        updated.completed = new_value >= goal.target_value;
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        updated
    }

    pub fn delete(&self, id: &str) -> bool {
        delete_record::<Goal, _>(&self.store, id)
    }
}
