//! Task use-case service.

use crate::gateway::{delete_record, list_for_user, replace_record, DocumentStore};
use crate::model::{Priority, Task, TaskCategory};
use crate::service::{require_text, ServiceError};
use crate::session::SessionContext;

/// Fields a caller supplies when creating a task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: TaskCategory,
    pub due_date: Option<String>,
}

pub struct TaskService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists the context user's tasks, unordered; ordering belongs to the
    /// filter engine.
    pub fn list(&self, ctx: &SessionContext) -> Vec<Task> {
        list_for_user(&self.store, &ctx.user_id)
    }

    /// Creates a task (starts pending) after validating the title. The
    /// record is written at its client-generated id so later saves
    /// overwrite in place.
    pub fn create(&self, ctx: &SessionContext, draft: TaskDraft) -> Result<Task, ServiceError> {
        require_text("title", &draft.title)?;

        let now = ctx.timestamp();
        let task = Task {
            id: ctx.record_id(),
            user_id: ctx.user_id.clone(),
            title: draft.title,
            description: draft.description,
            completed: false,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            created_at: now.clone(),
            updated_at: now,
        };
        replace_record(&self.store, &task);
        Ok(task)
    }

    /// Persists an edited task wholesale with a fresh `updated_at`.
    pub fn save(&self, ctx: &SessionContext, task: &Task) -> Result<Task, ServiceError> {
        require_text("title", &task.title)?;

        let mut updated = task.clone();
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        Ok(updated)
    }

    /// Flips completion and persists.
    pub fn toggle_completed(&self, ctx: &SessionContext, task: &Task) -> Task {
        let mut updated = task.clone();
        updated.completed = !task.completed;
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        updated
    }

    pub fn delete(&self, id: &str) -> bool {
        delete_record::<Task, _>(&self.store, id)
    }
}
