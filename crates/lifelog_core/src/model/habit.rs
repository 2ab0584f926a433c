//! Habit record.

use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// A recurring habit with a consecutive-day completion counter.
///
/// `streak` is a stored counter maintained incrementally by the toggle
/// operation, not recomputed from `completed_dates`. The two can drift when
/// past days are toggled; that drift is a documented property of the data,
/// so every mutation must go through the streak engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    pub streak: u32,
    /// Distinct `YYYY-MM-DD` day keys, kept sorted. The store drops empty
    /// arrays, so this must default on read.
    #[serde(default)]
    pub completed_dates: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}
