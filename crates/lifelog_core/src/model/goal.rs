//! Goal record.

use serde::{Deserialize, Serialize};

/// A measurable goal (`current_value` out of `target_value` in `unit`).
///
/// `completed` is stored independently of the values: the progress-update
/// operation keeps them in sync, but direct edits can set any combination.
/// This mirrors the store's historical behavior and is deliberately not
/// "fixed" here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    pub unit: String,
    /// Free-form category label, unlike the fixed task categories.
    pub category: String,
    /// Optional deadline day, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}
