//! Durable key-value string storage
//!
//! The page's durable store is a flat map of named string slots. This trait
//! is that surface and nothing more; structured access (the member
//! collection) is layered on top in `infrastructure::user`.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::error::DomainError;

/// A durable key-value string store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. Absent keys read as `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a slot, replacing any previous value.
    async fn put(&self, key: &str, value: String) -> Result<(), DomainError>;

    /// Remove a slot, returning whether it existed.
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;
}
