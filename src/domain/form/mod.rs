//! Registration form: field identities, the transient record, and the
//! validation rule table.

mod field;
mod phone;
mod record;
mod validation;

pub use field::{FieldId, FormFields, MapForm, FIELD_CHECK_ORDER};
pub use phone::format_phone_input;
pub use record::RegistrationRecord;
pub use validation::{
    is_checkable_username, latest_birth_date, validate_field, validate_record, FieldError,
    ValidationReport, MAX_USERNAME_LENGTH, MIN_AGE_YEARS, MIN_FIRST_NAME_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, PHONE_DIGITS,
};
