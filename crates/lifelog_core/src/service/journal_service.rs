//! Journal entry use-case service.

use crate::gateway::{delete_record, list_for_user, replace_record, DocumentStore};
use crate::model::{JournalEntry, Mood};
use crate::service::{require_text, ServiceError};
use crate::session::SessionContext;

/// Fields a caller supplies when writing a journal entry.
#[derive(Debug, Clone)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
    /// Kept as entered; duplicates are not removed.
    pub tags: Vec<String>,
    /// Day or timestamp the entry is about, not necessarily when it was
    /// written.
    pub date: String,
}

pub struct JournalService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> JournalService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, ctx: &SessionContext) -> Vec<JournalEntry> {
        list_for_user(&self.store, &ctx.user_id)
    }

    pub fn create(
        &self,
        ctx: &SessionContext,
        draft: JournalDraft,
    ) -> Result<JournalEntry, ServiceError> {
        require_text("title", &draft.title)?;

        let now = ctx.timestamp();
        let entry = JournalEntry {
            id: ctx.record_id(),
            user_id: ctx.user_id.clone(),
            title: draft.title,
            content: draft.content,
            mood: draft.mood,
            tags: draft.tags,
            date: draft.date,
            created_at: now.clone(),
            updated_at: now,
        };
        replace_record(&self.store, &entry);
        Ok(entry)
    }

    pub fn save(
        &self,
        ctx: &SessionContext,
        entry: &JournalEntry,
    ) -> Result<JournalEntry, ServiceError> {
        require_text("title", &entry.title)?;

        let mut updated = entry.clone();
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> bool {
        delete_record::<JournalEntry, _>(&self.store, id)
    }
}
