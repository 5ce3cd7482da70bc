//! Community website member registration
//!
//! The registration pipeline behind the sign-up form:
//! - field and form validation with a fixed, observable error order
//! - idempotent error presentation behind a narrow rendering seam
//! - a debounced, advisory username availability check
//! - a submission state machine with duplicate detection against a
//!   durable local member store
//!
//! The page itself (fields, submit button, dialogs) appears only as the
//! collaborator traits in [`domain::ui`] and [`domain::form`], so the
//! whole pipeline runs and tests headlessly.

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::form::{
    format_phone_input, validate_field, validate_record, FieldId, FieldError, FormFields,
    MapForm, RegistrationRecord, ValidationReport,
};
pub use domain::ui::{FieldNotice, FormPresenter, SubmitControl, SuccessNotifier};
pub use domain::user::{StoredUser, UserStatus};
pub use infrastructure::registration::{
    RegistrationSubmitter, SubmitOutcome, UsernameAvailabilityChecker,
};

use std::sync::Arc;
use std::time::Duration;

use infrastructure::registration::{LocalSubmissionBackend, RealtimeValidator};
use infrastructure::storage::StorageFactory;
use infrastructure::user::KeyValueUserStore;

/// The wired registration pipeline: everything the page's event handlers
/// need.
pub struct RegistrationPipeline {
    pub submitter: Arc<RegistrationSubmitter>,
    pub availability: Arc<UsernameAvailabilityChecker>,
    pub realtime: Arc<RealtimeValidator>,
}

/// Wire the pipeline from loaded configuration and initialize logging.
pub fn create_pipeline(
    presenter: Arc<dyn FormPresenter>,
    control: Arc<dyn SubmitControl>,
    notifier: Arc<dyn SuccessNotifier>,
) -> anyhow::Result<RegistrationPipeline> {
    let config = AppConfig::load()?;
    infrastructure::logging::init_logging(&config.logging);

    Ok(build_pipeline(&config, presenter, control, notifier))
}

/// Wire the pipeline from an explicit configuration.
pub fn build_pipeline(
    config: &AppConfig,
    presenter: Arc<dyn FormPresenter>,
    control: Arc<dyn SubmitControl>,
    notifier: Arc<dyn SuccessNotifier>,
) -> RegistrationPipeline {
    let kv = StorageFactory::from_config(&config.storage);
    let store = Arc::new(KeyValueUserStore::with_key(
        kv,
        config.storage.users_key.clone(),
    ));

    let backend = Arc::new(LocalSubmissionBackend::with_latency(
        Arc::clone(&store) as _,
        Duration::from_millis(config.registration.submit_latency_ms),
    ));

    let submitter = Arc::new(RegistrationSubmitter::new(
        backend,
        Arc::clone(&presenter),
        control,
        notifier,
    ));

    let availability = Arc::new(UsernameAvailabilityChecker::with_debounce(
        Arc::clone(&store) as _,
        Arc::clone(&presenter),
        Duration::from_millis(config.registration.debounce_ms),
    ));

    let realtime = Arc::new(RealtimeValidator::new(presenter));

    RegistrationPipeline {
        submitter,
        availability,
        realtime,
    }
}
