//! File-backed key-value storage

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

/// Durable key-value store backed by a single JSON file holding the
/// key-to-value map.
///
/// Every operation reads or replaces the whole file; there is no partial
/// update and no cross-process locking. That matches the access model of
/// the slots stored here (full-replace writes of serialized collections).
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_slots(&self) -> Result<HashMap<String, String>, DomainError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::serialization(format!(
                "Malformed store file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_slots(&self, slots: &HashMap<String, String>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    DomainError::storage(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(slots)
            .map_err(|e| DomainError::serialization(format!("Failed to serialize store: {}", e)))?;

        fs::write(&self.path, raw).await.map_err(|e| {
            DomainError::storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_slots().await?.remove(key))
    }

    async fn put(&self, key: &str, value: String) -> Result<(), DomainError> {
        let mut slots = self.read_slots().await?;
        slots.insert(key.to_string(), value);
        self.write_slots(&slots).await
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let mut slots = self.read_slots().await?;
        let existed = slots.remove(key).is_some();

        if existed {
            self.write_slots(&slots).await?;
        }

        Ok(existed)
    }
}
