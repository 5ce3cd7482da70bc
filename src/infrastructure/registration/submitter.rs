//! Registration submission orchestration

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::form::{validate_record, FormFields, RegistrationRecord, ValidationReport};
use crate::domain::ui::{CancelPrompt, FormPresenter, Navigator, SubmitControl, SuccessNotifier};
use crate::domain::user::StoredUser;
use crate::domain::DomainError;

use super::backend::{SubmissionBackend, SubmissionOutcome};

/// Aggregate message for a post-validation duplicate.
pub const DUPLICATE_MESSAGE: &str = "This username or email is already registered";
/// Aggregate message when the backend fails outright.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Registration could not be completed. Please try again later.";

/// Where a submission attempt ended up.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the aggregate panel lists the errors and the
    /// submit control was never touched.
    Rejected(ValidationReport),
    /// Validation passed but a stored member already holds the username
    /// or email.
    Duplicate,
    /// The member was persisted and the success dialog shown.
    Success(StoredUser),
    /// The backend failed; the generic failure message was rendered.
    Failed(DomainError),
}

/// Drives a submission attempt from form read to rendered result.
///
/// Exactly one attempt runs at a time: the submit control is disabled for
/// the whole asynchronous leg and restored on every exit from it. The
/// availability checker is not serialized against this; both sides
/// read-modify-write the same store, which is the known advisory race.
pub struct RegistrationSubmitter {
    backend: Arc<dyn SubmissionBackend>,
    presenter: Arc<dyn FormPresenter>,
    control: Arc<dyn SubmitControl>,
    notifier: Arc<dyn SuccessNotifier>,
}

impl RegistrationSubmitter {
    pub fn new(
        backend: Arc<dyn SubmissionBackend>,
        presenter: Arc<dyn FormPresenter>,
        control: Arc<dyn SubmitControl>,
        notifier: Arc<dyn SuccessNotifier>,
    ) -> Self {
        Self {
            backend,
            presenter,
            control,
            notifier,
        }
    }

    /// Handle a submit event: extract, validate, and if clean hand the
    /// record to the backend.
    pub async fn submit(&self, form: &dyn FormFields) -> SubmitOutcome {
        let record = RegistrationRecord::from_fields(form);
        let report = validate_record(&record);

        if !report.is_valid() {
            self.presenter.render_summary(&report.messages());
            return SubmitOutcome::Rejected(report);
        }

        self.control.set_busy();

        match self.backend.submit(&record).await {
            Ok(SubmissionOutcome::Registered(user)) => {
                info!(username = user.username(), id = user.id(), "member registered");
                self.notifier.notify_success();
                self.control.restore();
                SubmitOutcome::Success(user)
            }
            Ok(SubmissionOutcome::Duplicate) => {
                self.presenter.render_summary(&[DUPLICATE_MESSAGE.to_string()]);
                self.control.restore();
                SubmitOutcome::Duplicate
            }
            Err(e) => {
                error!(error = %e, "registration submission failed");
                self.presenter
                    .render_summary(&[SUBMIT_FAILED_MESSAGE.to_string()]);
                self.control.restore();
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// The cancel button's path, outside the submission state machine: confirm
/// that in-progress field state may be discarded, then leave the form.
pub fn handle_cancel(prompt: &dyn CancelPrompt, navigator: &dyn Navigator) {
    if prompt.confirm_discard() {
        navigator.leave_form();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::domain::form::{FieldError, FieldId, MapForm};
    use crate::domain::ui::mock::{
        CannedPrompt, RecordingControl, RecordingNavigator, RecordingNotifier,
        RecordingPresenter,
    };
    use crate::domain::user::UserStore;
    use crate::infrastructure::registration::backend::{
        LocalSubmissionBackend, MockSubmissionBackend,
    };
    use crate::infrastructure::storage::InMemoryKeyValueStore;
    use crate::infrastructure::user::KeyValueUserStore;

    struct Harness {
        submitter: RegistrationSubmitter,
        presenter: Arc<RecordingPresenter>,
        control: Arc<RecordingControl>,
        notifier: Arc<RecordingNotifier>,
        store: Arc<KeyValueUserStore>,
    }

    fn harness() -> Harness {
        let store = Arc::new(KeyValueUserStore::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let backend = Arc::new(LocalSubmissionBackend::with_latency(
            Arc::clone(&store) as _,
            Duration::ZERO,
        ));

        let presenter = Arc::new(RecordingPresenter::new());
        let control = Arc::new(RecordingControl::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let submitter = RegistrationSubmitter::new(
            backend,
            Arc::clone(&presenter) as _,
            Arc::clone(&control) as _,
            Arc::clone(&notifier) as _,
        );

        Harness {
            submitter,
            presenter,
            control,
            notifier,
            store,
        }
    }

    fn valid_form(username: &str, email: &str) -> MapForm {
        MapForm::new()
            .set(FieldId::FirstName, "Fatimah")
            .set(FieldId::LastName, "Saelim")
            .set(FieldId::Username, username)
            .set(FieldId::Password, "Abcdefgh1")
            .set(FieldId::ConfirmPassword, "Abcdefgh1")
            .set(FieldId::Email, email)
            .set(FieldId::Phone, "081-234-5678")
    }

    #[tokio::test]
    async fn test_invalid_form_renders_summary_without_touching_control() {
        let h = harness();
        let form = MapForm::new(); // everything empty

        let outcome = h.submitter.submit(&form).await;

        let SubmitOutcome::Rejected(report) = outcome else {
            panic!("expected rejection");
        };
        assert!(!report.is_valid());

        // The summary lists every message, in order.
        let summary = h.presenter.summary().unwrap();
        assert_eq!(summary, report.messages());
        assert_eq!(summary[0], FieldError::FirstNameRequired.to_string());

        // The validation path never reaches the button.
        assert!(h.control.transitions().is_empty());
        assert_eq!(h.notifier.count(), 0);
        assert!(h.store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clean_submission_persists_and_notifies() {
        let h = harness();

        let outcome = h
            .submitter
            .submit(&valid_form("member01", "m1@example.com"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Success(_)));
        assert_eq!(h.control.transitions(), vec!["busy", "restore"]);
        assert_eq!(h.notifier.count(), 1);
        assert_eq!(h.store.load().await.unwrap().len(), 1);
        // No aggregate panel on the happy path.
        assert_eq!(h.presenter.summary(), None);
    }

    #[tokio::test]
    async fn test_duplicate_renders_single_message_and_restores() {
        let h = harness();

        h.submitter
            .submit(&valid_form("member01", "m1@example.com"))
            .await;
        let outcome = h
            .submitter
            .submit(&valid_form("member01", "other@example.com"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Duplicate));
        assert_eq!(
            h.presenter.summary(),
            Some(vec![DUPLICATE_MESSAGE.to_string()])
        );
        // busy/restore from both attempts.
        assert_eq!(
            h.control.transitions(),
            vec!["busy", "restore", "busy", "restore"]
        );
        assert_eq!(h.notifier.count(), 1);
        assert_eq!(h.store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_renders_generic_message() {
        let mut backend = MockSubmissionBackend::new();
        backend
            .expect_submit()
            .returning(|_| Err(DomainError::storage("disk full")));

        let presenter = Arc::new(RecordingPresenter::new());
        let control = Arc::new(RecordingControl::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let submitter = RegistrationSubmitter::new(
            Arc::new(backend),
            Arc::clone(&presenter) as _,
            Arc::clone(&control) as _,
            Arc::clone(&notifier) as _,
        );

        let outcome = submitter
            .submit(&valid_form("member01", "m1@example.com"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(
            presenter.summary(),
            Some(vec![SUBMIT_FAILED_MESSAGE.to_string()])
        );
        assert_eq!(control.transitions(), vec!["busy", "restore"]);
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_retry_after_duplicate_succeeds() {
        let h = harness();

        h.submitter
            .submit(&valid_form("member01", "m1@example.com"))
            .await;
        h.submitter
            .submit(&valid_form("member01", "other@example.com"))
            .await;

        let outcome = h
            .submitter
            .submit(&valid_form("member02", "other@example.com"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Success(_)));
        assert_eq!(h.store.load().await.unwrap().len(), 2);
    }

    #[test]
    fn test_cancel_confirmed_leaves_form() {
        let navigator = RecordingNavigator::new();
        handle_cancel(&CannedPrompt::answering(true), &navigator);
        assert!(navigator.left_form());
    }

    #[test]
    fn test_cancel_declined_stays() {
        let navigator = RecordingNavigator::new();
        handle_cancel(&CannedPrompt::answering(false), &navigator);
        assert!(!navigator.left_form());
    }
}
