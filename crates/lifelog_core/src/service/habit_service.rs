//! Habit use-case service.

use crate::engine::streak::toggle_completion;
use crate::gateway::{delete_record, list_for_user, replace_record, DocumentStore};
use crate::model::{Frequency, Habit};
use crate::service::{require_text, ServiceError};
use crate::session::SessionContext;
use chrono::NaiveDate;

/// Fields a caller supplies when creating a habit.
#[derive(Debug, Clone)]
pub struct HabitDraft {
    pub name: String,
    pub description: Option<String>,
    pub frequency: Frequency,
}

pub struct HabitService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> HabitService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, ctx: &SessionContext) -> Vec<Habit> {
        list_for_user(&self.store, &ctx.user_id)
    }

    /// Creates a habit with no completions and a zero streak.
    pub fn create(&self, ctx: &SessionContext, draft: HabitDraft) -> Result<Habit, ServiceError> {
        require_text("name", &draft.name)?;

        let now = ctx.timestamp();
        let habit = Habit {
            id: ctx.record_id(),
            user_id: ctx.user_id.clone(),
            name: draft.name,
            description: draft.description,
            frequency: draft.frequency,
            streak: 0,
            completed_dates: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        };
        replace_record(&self.store, &habit);
        Ok(habit)
    }

    /// Persists an edited habit wholesale. Streak fields are carried as-is;
    /// all streak movement goes through the toggle operations.
    pub fn save(&self, ctx: &SessionContext, habit: &Habit) -> Result<Habit, ServiceError> {
        require_text("name", &habit.name)?;

        let mut updated = habit.clone();
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        Ok(updated)
    }

    /// Toggles today's completion via the streak engine and persists.
    pub fn toggle(&self, ctx: &SessionContext, habit: &Habit) -> Habit {
        self.toggle_on(ctx, habit, ctx.today())
    }

    /// Toggles an arbitrary day. The streak rule stays local (it checks
    /// that day's yesterday only), so back-dated toggles can drift the
    /// stored streak; see the engine docs.
    pub fn toggle_on(&self, ctx: &SessionContext, habit: &Habit, day: NaiveDate) -> Habit {
        let updated = toggle_completion(habit, day, &ctx.timestamp());
        replace_record(&self.store, &updated);
        updated
    }

    pub fn delete(&self, id: &str) -> bool {
        delete_record::<Habit, _>(&self.store, id)
    }
}
