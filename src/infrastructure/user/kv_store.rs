//! Member collection stored in a single key-value slot

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::storage::KeyValueStore;
use crate::domain::user::{StoredUser, UserStore};
use crate::domain::DomainError;

/// Default slot name for the member collection.
pub const DEFAULT_USERS_KEY: &str = "community_users";

/// [`UserStore`] over one named slot of a [`KeyValueStore`].
///
/// The whole collection is serialized as a JSON array into the slot; loads
/// read it all, saves replace it all.
///
/// Read failures and malformed payloads degrade to the empty collection
/// with a warning, so registration stays usable when the slot is corrupt.
/// Write failures propagate to the caller.
pub struct KeyValueUserStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueUserStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_USERS_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl UserStore for KeyValueUserStore {
    async fn load(&self) -> Result<Vec<StoredUser>, DomainError> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                warn!(key = %self.key, error = %e, "users slot unreadable, treating as empty");
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(key = %self.key, error = %e, "users slot malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, users: &[StoredUser]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(users)
            .map_err(|e| DomainError::serialization(format!("Failed to serialize users: {}", e)))?;

        self.store.put(&self.key, raw).await
    }
}
