//! Session context and account lifecycle.
//!
//! # Responsibility
//! - Carry the current user and clock explicitly into every service and
//!   engine call; there is no process-wide "current user" singleton.
//! - Provide login/register/guest over the `users` collection.
//!
//! # Invariants
//! - Credential checks are a linear scan with plaintext equality, exactly
//!   what the existing store's data supports. This is a documented design
//!   flaw, kept on purpose; see DESIGN.md before hardening it.
//! - `SessionContext` timestamps keep the local UTC offset so that the
//!   day prefix of a written timestamp always equals `today()`.

use crate::gateway::DocumentStore;
use crate::model::User;
use chrono::{DateTime, Local, NaiveDate, SecondsFormat};
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known id for the local guest identity.
pub const GUEST_USER_ID: &str = "guest";

const USERS_COLLECTION: &str = "users";

/// The identity and clock a call operates under.
///
/// Engines and services never reach for ambient time or a global user;
/// tests pin both through [`SessionContext::at`].
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
    now: DateTime<Local>,
}

impl SessionContext {
    /// Context for `user_id` at the current wall-clock time.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::at(user_id, Local::now())
    }

    /// Context with a pinned clock.
    pub fn at(user_id: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            user_id: user_id.into(),
            now,
        }
    }

    /// Local calendar day of this context.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Local day key, `YYYY-MM-DD`.
    pub fn today_key(&self) -> String {
        crate::engine::streak::day_key(self.today())
    }

    /// ISO-8601 timestamp with local offset, millisecond precision.
    pub fn timestamp(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Millis, false)
    }

    /// Client-generated record id: current epoch millis as a string.
    pub fn record_id(&self) -> String {
        self.now.timestamp_millis().to_string()
    }
}

/// Account lifecycle failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No stored user matches the email/password pair (or the user list
    /// could not be fetched; the two are indistinguishable by contract).
    InvalidCredentials,
    /// Registration target email is already taken.
    EmailInUse,
    /// The store rejected or dropped the new account record.
    Unavailable,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::EmailInUse => write!(f, "an account with this email already exists"),
            Self::Unavailable => write!(f, "account store unavailable"),
        }
    }
}

impl Error for AuthError {}

/// Login/register/guest over the `users` collection.
pub struct AuthService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn users(&self) -> Vec<User> {
        let Some(map) = self.store.get_all(USERS_COLLECTION) else {
            return Vec::new();
        };
        let mut users = Vec::new();
        for (key, value) in map {
            match serde_json::from_value::<User>(value) {
                Ok(mut user) => {
                    if user.id.is_empty() {
                        user.id = key;
                    }
                    users.push(user);
                }
                Err(err) => {
                    warn!(
                        "event=record_decode collection={USERS_COLLECTION} key={key} status=skipped error={err}"
                    );
                }
            }
        }
        users
    }

    /// Authenticates by scanning stored users for an exact email/password
    /// match.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users()
            .into_iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        info!("event=login user_id={} status=ok", user.id);
        Ok(user)
    }

    /// Creates an account, rejecting duplicate emails first.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        ctx: &SessionContext,
    ) -> Result<User, AuthError> {
        if self.users().iter().any(|user| user.email == email) {
            return Err(AuthError::EmailInUse);
        }

        let mut user = User {
            id: String::new(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            created_at: ctx.timestamp(),
        };
        let value: Value =
            serde_json::to_value(&user).map_err(|_| AuthError::Unavailable)?;
        let key = self
            .store
            .create(USERS_COLLECTION, &value)
            .ok_or(AuthError::Unavailable)?;
        user.id = key;
        info!("event=register user_id={} status=ok", user.id);
        Ok(user)
    }

    /// Fixed local identity for browsing without an account.
    pub fn guest(&self, ctx: &SessionContext) -> User {
        User {
            id: GUEST_USER_ID.to_string(),
            email: "guest@example.com".to_string(),
            password: String::new(),
            name: "Guest User".to_string(),
            created_at: ctx.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthService, SessionContext};
    use crate::gateway::{DocumentStore, MemoryDocumentStore};
    use chrono::{Local, TimeZone};
    use serde_json::json;

    #[test]
    fn timestamp_day_prefix_matches_today() {
        let now = Local.with_ymd_and_hms(2024, 6, 6, 23, 30, 0).unwrap();
        let ctx = SessionContext::at("u", now);
        assert!(ctx.timestamp().starts_with(&ctx.today_key()));
    }

    #[test]
    fn undecodable_user_records_are_skipped() {
        let store = MemoryDocumentStore::new();
        store.create("users", &json!({"email": 42}));

        let auth = AuthService::new(&store);
        let now = Local.with_ymd_and_hms(2024, 6, 6, 9, 0, 0).unwrap();
        let ctx = SessionContext::at("", now);

        let registered = auth
            .register("alice@example.com", "hunter2", "Alice", &ctx)
            .unwrap();
        let logged_in = auth.login("alice@example.com", "hunter2").unwrap();
        assert_eq!(logged_in.id, registered.id);
    }

    #[test]
    fn record_id_is_epoch_millis() {
        let now = Local.timestamp_millis_opt(1_717_666_200_000).unwrap();
        let ctx = SessionContext::at("u", now);
        assert_eq!(ctx.record_id(), "1717666200000");
    }
}
