//! Real-time (per-field) validation glue

use std::sync::Arc;

use crate::domain::form::{
    validate_field, FieldError, FieldId, FormFields, RegistrationRecord,
};
use crate::domain::ui::{FieldNotice, FormPresenter};

/// Fields validated when focus leaves them. The password pair is handled
/// by the live confirmation check instead, and the optional fields show
/// nothing until the full submit.
const BLUR_CHECKED: [FieldId; 5] = [
    FieldId::FirstName,
    FieldId::LastName,
    FieldId::Username,
    FieldId::Email,
    FieldId::Phone,
];

/// Inline validation as the user moves through the form: errors appear on
/// blur, clear on the next keystroke, and the password confirmation is
/// checked live against the password once both have content.
pub struct RealtimeValidator {
    presenter: Arc<dyn FormPresenter>,
}

impl RealtimeValidator {
    pub fn new(presenter: Arc<dyn FormPresenter>) -> Self {
        Self { presenter }
    }

    /// Focus left a field: validate it and render any error. A valid value
    /// draws nothing; stale notices are cleared by `on_input`.
    pub fn on_blur(&self, form: &dyn FormFields, field: FieldId) {
        if !BLUR_CHECKED.contains(&field) {
            return;
        }

        let record = RegistrationRecord::from_fields(form);

        if let Some(error) = validate_field(&record, field) {
            self.presenter
                .render_field(field, Some(FieldNotice::error(error.to_string())));
        }
    }

    /// A keystroke in a field clears its notice.
    pub fn on_input(&self, field: FieldId) {
        self.presenter.render_field(field, None);
    }

    /// A keystroke in the confirmation field: once both values have
    /// content, show the mismatch error or clear it when they agree.
    pub fn on_confirm_password_input(&self, password: &str, confirm: &str) {
        if password.is_empty() || confirm.is_empty() {
            return;
        }

        if password != confirm {
            self.presenter.render_field(
                FieldId::ConfirmPassword,
                Some(FieldNotice::error(FieldError::PasswordMismatch.to_string())),
            );
        } else {
            self.presenter.render_field(FieldId::ConfirmPassword, None);
        }
    }
}
