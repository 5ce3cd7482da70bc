//! The asynchronous submission seam and its local implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::form::RegistrationRecord;
use crate::domain::user::{StoredUser, UserStore};
use crate::domain::DomainError;

/// Default simulated round-trip latency of the local backend.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// What the backend did with a validated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The record was persisted.
    Registered(StoredUser),
    /// A stored member already holds the username or email.
    Duplicate,
}

/// Accepts validated registration records.
///
/// The submitter's state machine is driven entirely by this result; a real
/// remote registration service implements the same trait.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit(&self, record: &RegistrationRecord)
        -> Result<SubmissionOutcome, DomainError>;
}

/// Local mock-persistence backend over the member store.
///
/// Read-modify-write with no locking: load everything, reject on an exact
/// username or email match, otherwise append and save everything back. The
/// duplicate check is advisory: a concurrent writer can slip a matching
/// record in between the load and the save.
pub struct LocalSubmissionBackend {
    store: Arc<dyn UserStore>,
    latency: Duration,
}

impl LocalSubmissionBackend {
    /// Backend with the default simulated latency.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_latency(store, DEFAULT_SUBMIT_LATENCY)
    }

    /// Backend with a specific latency; zero disables the wait.
    pub fn with_latency(store: Arc<dyn UserStore>, latency: Duration) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl SubmissionBackend for LocalSubmissionBackend {
    async fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> Result<SubmissionOutcome, DomainError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut users = self.store.load().await?;

        let duplicate = users
            .iter()
            .any(|user| user.username() == record.username || user.email() == record.email);

        if duplicate {
            return Ok(SubmissionOutcome::Duplicate);
        }

        let user = StoredUser::from_record(record);
        users.push(user.clone());
        self.store.save(&users).await?;

        Ok(SubmissionOutcome::Registered(user))
    }
}
