//! Journal entry record.

use crate::model::mood::Mood;
use serde::{Deserialize, Serialize};

/// A dated free-text journal entry with optional mood and tags.
///
/// Tags are kept as entered; duplicates are not removed anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// The store drops empty arrays, so this must default on read.
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}
