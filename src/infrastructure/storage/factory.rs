//! Storage factory for runtime backend selection

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::storage::KeyValueStore;

use super::file::FileKeyValueStore;
use super::in_memory::InMemoryKeyValueStore;

pub struct StorageFactory;

impl StorageFactory {
    /// Build the configured key-value backend.
    pub fn from_config(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
        match config.backend {
            StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
            StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.path)),
        }
    }
}
