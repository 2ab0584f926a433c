//! Daily mood logging.

use crate::gateway::{delete_record, list_for_user, replace_record, DocumentStore};
use crate::model::{Mood, MoodEntry};
use crate::session::SessionContext;

pub struct MoodService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> MoodService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, ctx: &SessionContext) -> Vec<MoodEntry> {
        list_for_user(&self.store, &ctx.user_id)
    }

    /// Records today's mood, replacing an existing entry for the same
    /// calendar day in place (same id) so at most one entry exists per
    /// user per day. Blank notes are stored as absent.
    pub fn log_mood(&self, ctx: &SessionContext, mood: Mood, notes: Option<&str>) -> MoodEntry {
        let today_prefix = ctx.today_key();
        let existing_id = self
            .list(ctx)
            .into_iter()
            .find(|entry| entry.date.starts_with(&today_prefix))
            .map(|entry| entry.id);

        let entry = MoodEntry {
            id: existing_id.unwrap_or_else(|| ctx.record_id()),
            user_id: ctx.user_id.clone(),
            mood,
            notes: notes
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
            date: ctx.timestamp(),
            created_at: ctx.timestamp(),
        };

        replace_record(&self.store, &entry);
        entry
    }

    pub fn delete(&self, id: &str) -> bool {
        delete_record::<MoodEntry, _>(&self.store, id)
    }
}
