//! In-memory key-value storage

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

/// Thread-safe in-memory key-value store.
///
/// Useful for testing and development. Data is lost when the process
/// terminates.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with slots
    pub fn with_slots(slots: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            slots: RwLock::new(slots.into_iter().collect()),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let slots = self
            .slots
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(slots.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), DomainError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        slots.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(slots.remove(key).is_some())
    }
}
