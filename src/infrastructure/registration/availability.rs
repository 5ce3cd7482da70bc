//! Debounced username availability checking

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::form::{is_checkable_username, FieldId};
use crate::domain::ui::{FieldNotice, FormPresenter};
use crate::domain::user::UserStore;

use super::debounce::DebouncedTask;

/// Shown when a stored member already holds the username.
pub const USERNAME_TAKEN_MESSAGE: &str = "This username is already taken";
/// Shown when no stored member holds the username.
pub const USERNAME_AVAILABLE_MESSAGE: &str = "This username is available";

/// Default quiet period before a check runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Advisory, debounced availability check for the username field.
///
/// Each keystroke supersedes the pending check; the surviving one runs
/// after the quiet period and only if the value qualifies (long enough,
/// allowed charset). The result is informative only; submission performs
/// its own duplicate check, and the two can interleave freely over the
/// unsynchronized store.
pub struct UsernameAvailabilityChecker {
    store: Arc<dyn UserStore>,
    presenter: Arc<dyn FormPresenter>,
    debounce: DebouncedTask,
}

impl UsernameAvailabilityChecker {
    pub fn new(store: Arc<dyn UserStore>, presenter: Arc<dyn FormPresenter>) -> Self {
        Self::with_debounce(store, presenter, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(
        store: Arc<dyn UserStore>,
        presenter: Arc<dyn FormPresenter>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            presenter,
            debounce: DebouncedTask::new(delay),
        }
    }

    /// Handle a keystroke in the username field.
    pub fn on_input(&self, raw: &str) {
        let value = raw.trim().to_string();
        let store = Arc::clone(&self.store);
        let presenter = Arc::clone(&self.presenter);

        self.debounce.schedule(async move {
            if !is_checkable_username(&value) {
                return;
            }

            let users = match store.load().await {
                Ok(users) => users,
                Err(e) => {
                    // Advisory check: degrade silently.
                    warn!(error = %e, "availability check skipped, store unreadable");
                    return;
                }
            };

            let taken = users.iter().any(|user| user.username() == value);

            let notice = if taken {
                FieldNotice::error(USERNAME_TAKEN_MESSAGE)
            } else {
                FieldNotice::available(USERNAME_AVAILABLE_MESSAGE)
            };

            presenter.render_field(FieldId::Username, Some(notice));
        });
    }
}
