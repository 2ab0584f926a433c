//! HTTP implementation of the document store.
//!
//! # Responsibility
//! - Speak the remote store's REST dialect: `GET/POST/PUT/DELETE` against
//!   `{base}/{path}.json`, bodies and responses in JSON.
//! - Absorb transport failures per the gateway contract: log at `error`
//!   and return the "no data" value.

use crate::config::Config;
use crate::gateway::store::DocumentStore;
use log::error;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Transport-level gateway failure.
#[derive(Debug)]
pub enum GatewayError {
    /// Request construction, connection, status, or body decode failure.
    Http(reqwest::Error),
    /// The configured base URL is unusable.
    InvalidConfig(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{err}"),
            Self::InvalidConfig(message) => write!(f, "invalid gateway config: {message}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// Shape of the store's insert response.
#[derive(Debug, Deserialize)]
struct CreatedKey {
    name: String,
}

/// Blocking HTTP client for the remote JSON document store.
///
/// Blocking is intentional: the caller model is strictly sequential
/// request/response per user interaction, with no in-flight cancellation.
pub struct HttpDocumentStore {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpDocumentStore {
    /// Builds a store client from configuration.
    pub fn new(config: &Config) -> GatewayResult<Self> {
        let base_url = config.store_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(GatewayError::InvalidConfig(
                "store_url must not be empty".to_string(),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}.json", self.base_url)
    }

    fn try_get_all(&self, collection: &str) -> GatewayResult<Option<BTreeMap<String, Value>>> {
        let response = self.client.get(self.url(collection)).send()?;
        // The store answers a literal JSON `null` for absent collections.
        let body: Option<BTreeMap<String, Value>> = response.error_for_status()?.json()?;
        Ok(body)
    }

    fn try_create(&self, collection: &str, record: &Value) -> GatewayResult<String> {
        let response = self.client.post(self.url(collection)).json(record).send()?;
        let created: CreatedKey = response.error_for_status()?.json()?;
        Ok(created.name)
    }

    fn try_replace(&self, collection: &str, id: &str, record: &Value) -> GatewayResult<Value> {
        let path = format!("{collection}/{id}");
        let response = self.client.put(self.url(&path)).json(record).send()?;
        let stored: Value = response.error_for_status()?.json()?;
        Ok(stored)
    }

    fn try_remove(&self, collection: &str, id: &str) -> GatewayResult<()> {
        let path = format!("{collection}/{id}");
        let response = self.client.delete(self.url(&path)).send()?;
        response.error_for_status()?;
        Ok(())
    }
}

impl DocumentStore for HttpDocumentStore {
    fn get_all(&self, collection: &str) -> Option<BTreeMap<String, Value>> {
        match self.try_get_all(collection) {
            Ok(body) => body,
            Err(err) => {
                error!("event=store_get collection={collection} status=error error={err}");
                None
            }
        }
    }

    fn create(&self, collection: &str, record: &Value) -> Option<String> {
        match self.try_create(collection, record) {
            Ok(key) => Some(key),
            Err(err) => {
                error!("event=store_create collection={collection} status=error error={err}");
                None
            }
        }
    }

    fn replace(&self, collection: &str, id: &str, record: &Value) -> Option<Value> {
        match self.try_replace(collection, id, record) {
            Ok(stored) => Some(stored),
            Err(err) => {
                error!("event=store_replace collection={collection} id={id} status=error error={err}");
                None
            }
        }
    }

    fn remove(&self, collection: &str, id: &str) -> bool {
        match self.try_remove(collection, id) {
            Ok(()) => true,
            Err(err) => {
                error!("event=store_delete collection={collection} id={id} status=error error={err}");
                false
            }
        }
    }
}
