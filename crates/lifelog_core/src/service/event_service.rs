//! Calendar event use-case service.

use crate::gateway::{delete_record, list_for_user, replace_record, DocumentStore};
use crate::model::Event;
use crate::service::{require_text, ServiceError};
use crate::session::SessionContext;

/// Fields a caller supplies when creating an event.
///
/// Start/end ordering is deliberately not validated: the store holds
/// inverted ranges already and downstream code tolerates them.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub all_day: bool,
    pub color: Option<String>,
}

pub struct EventService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> EventService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, ctx: &SessionContext) -> Vec<Event> {
        list_for_user(&self.store, &ctx.user_id)
    }

    pub fn create(&self, ctx: &SessionContext, draft: EventDraft) -> Result<Event, ServiceError> {
        require_text("title", &draft.title)?;

        let now = ctx.timestamp();
        let event = Event {
            id: ctx.record_id(),
            user_id: ctx.user_id.clone(),
            title: draft.title,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            all_day: draft.all_day,
            color: draft.color,
            created_at: now.clone(),
            updated_at: now,
        };
        replace_record(&self.store, &event);
        Ok(event)
    }

    pub fn save(&self, ctx: &SessionContext, event: &Event) -> Result<Event, ServiceError> {
        require_text("title", &event.title)?;

        let mut updated = event.clone();
        updated.updated_at = ctx.timestamp();
        replace_record(&self.store, &updated);
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> bool {
        delete_record::<Event, _>(&self.store, id)
    }
}
