//! User account record.

use serde::{Deserialize, Serialize};

/// Stored user account.
///
/// The password is kept in plaintext because that is what the existing
/// store contains; see the auth notes in DESIGN.md before extending this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store key; user records historically carry no embedded id, so this
    /// is filled from the collection key on read.
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub name: String,
    pub created_at: String,
}
