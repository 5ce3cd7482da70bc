//! Shared access to the member collection

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::StoredUser;
use crate::domain::error::DomainError;

/// Read-all/write-all access to the member collection.
///
/// This is deliberately a whole-collection interface: the backing slot is a
/// single serialized sequence, every caller does read-modify-write, and
/// there is no locking between them. The duplicate constraint enforced on
/// top of this is advisory: two interleaved writers can both pass their
/// checks before either saves. A transactional implementation can slot in
/// behind this trait without changing any call site.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the full collection. An absent slot reads as empty.
    async fn load(&self) -> Result<Vec<StoredUser>, DomainError>;

    /// Replace the full collection.
    async fn save(&self, users: &[StoredUser]) -> Result<(), DomainError>;
}
