//! Calendar event record.

use serde::{Deserialize, Serialize};

/// A calendar entry with a start/end range.
///
/// `end_date` should not precede `start_date`, but the store has never
/// enforced that and existing data may violate it; consumers must tolerate
/// inverted ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
