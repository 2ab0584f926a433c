//! Mood scale and daily mood entry record.

use serde::{Deserialize, Serialize};

/// Five-point mood scale shared by journal entries and mood tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

impl Mood {
    /// Chart score on a 1-5 scale (very-sad=1 .. very-happy=5).
    pub fn score(self) -> u8 {
        match self {
            Self::VerySad => 1,
            Self::Sad => 2,
            Self::Neutral => 3,
            Self::Happy => 4,
            Self::VeryHappy => 5,
        }
    }
}

/// One mood log per user per calendar day.
///
/// The one-per-day rule is enforced by the upsert in `MoodService`, not by
/// any store constraint. Unlike other records this one has no `updated_at`;
/// an upsert rewrites `created_at` as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: String,
    pub created_at: String,
}
