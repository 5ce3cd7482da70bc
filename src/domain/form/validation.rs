//! Registration field and form validation
//!
//! The rule table is positional: fields are always checked in
//! [`FIELD_CHECK_ORDER`](super::field::FIELD_CHECK_ORDER) and each field
//! contributes at most one error, so the aggregate message sequence is a
//! stable, observable contract.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::field::{FieldId, FIELD_CHECK_ORDER};
use super::record::RegistrationRecord;

/// Minimum first-name length
pub const MIN_FIRST_NAME_LENGTH: usize = 2;
/// Username length bounds
pub const MIN_USERNAME_LENGTH: usize = 6;
pub const MAX_USERNAME_LENGTH: usize = 20;
/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Required number of phone digits
pub const PHONE_DIGITS: usize = 10;
/// Minimum age in years, counted by calendar year only
pub const MIN_AGE_YEARS: i32 = 13;

/// Valid usernames: ASCII letters and digits only
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

/// `local@domain.tld`-shaped addresses: one `@`, a dot after it, no whitespace
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A single field validation failure. The `Display` strings are the
/// messages shown to the user, inline and in the aggregate panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your first name")]
    FirstNameRequired,

    #[error("First name must be at least {0} characters")]
    FirstNameTooShort(usize),

    #[error("Please enter your last name")]
    LastNameRequired,

    #[error("Please choose a username")]
    UsernameRequired,

    #[error("Username must be {min}-{max} characters")]
    UsernameLength { min: usize, max: usize },

    #[error("Username may only contain letters and numbers")]
    UsernameCharset,

    #[error("Please enter a password")]
    PasswordRequired,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Please confirm your password")]
    ConfirmPasswordRequired,

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("Please enter your email address")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Please enter your phone number")]
    PhoneRequired,

    #[error("Phone number must have exactly {0} digits")]
    PhoneLength(usize),

    #[error("Birth date is not a valid date")]
    BirthDateInvalid,

    #[error("You must be at least {0} years old to register")]
    TooYoung(i32),
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> FieldId {
        match self {
            Self::FirstNameRequired | Self::FirstNameTooShort(_) => FieldId::FirstName,
            Self::LastNameRequired => FieldId::LastName,
            Self::UsernameRequired | Self::UsernameLength { .. } | Self::UsernameCharset => {
                FieldId::Username
            }
            Self::PasswordRequired | Self::PasswordTooShort(_) => FieldId::Password,
            Self::ConfirmPasswordRequired | Self::PasswordMismatch => FieldId::ConfirmPassword,
            Self::EmailRequired | Self::EmailInvalid => FieldId::Email,
            Self::PhoneRequired | Self::PhoneLength(_) => FieldId::Phone,
            Self::BirthDateInvalid | Self::TooYoung(_) => FieldId::BirthDate,
        }
    }
}

/// Result of validating a full registration record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The triggered errors, in field-check order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The ordered human-readable messages for the aggregate panel.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Validate a single field of the record against the rule table.
///
/// `ConfirmPassword` needs the password for the equality check, which is why
/// this takes the whole record rather than one value. `Address` and `Gender`
/// carry no rules and always pass.
pub fn validate_field(record: &RegistrationRecord, field: FieldId) -> Option<FieldError> {
    match field {
        FieldId::FirstName => validate_first_name(&record.first_name),
        FieldId::LastName => validate_last_name(&record.last_name),
        FieldId::Username => validate_username(&record.username),
        FieldId::Password => validate_password(&record.password),
        FieldId::ConfirmPassword => {
            validate_confirm_password(&record.password, &record.confirm_password)
        }
        FieldId::Email => validate_email(&record.email),
        FieldId::Phone => validate_phone(&record.phone),
        FieldId::BirthDate => validate_birth_date(&record.birth_date, Utc::now().date_naive()),
        FieldId::Address | FieldId::Gender => None,
    }
}

/// Validate a full record, collecting every triggered error in the fixed
/// field-check order.
pub fn validate_record(record: &RegistrationRecord) -> ValidationReport {
    let errors = FIELD_CHECK_ORDER
        .iter()
        .filter_map(|field| validate_field(record, *field))
        .collect();

    ValidationReport { errors }
}

/// Whether a username value qualifies for an availability check: long
/// enough and within the allowed charset. Shorter or malformed values are
/// not looked up at all.
pub fn is_checkable_username(value: &str) -> bool {
    value.chars().count() >= MIN_USERNAME_LENGTH && USERNAME_PATTERN.is_match(value)
}

/// Latest acceptable birth date: today. The form uses this as the upper
/// bound of its date input.
pub fn latest_birth_date() -> NaiveDate {
    Utc::now().date_naive()
}

fn validate_first_name(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::FirstNameRequired)
    } else if value.chars().count() < MIN_FIRST_NAME_LENGTH {
        Some(FieldError::FirstNameTooShort(MIN_FIRST_NAME_LENGTH))
    } else {
        None
    }
}

fn validate_last_name(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::LastNameRequired)
    } else {
        None
    }
}

fn validate_username(value: &str) -> Option<FieldError> {
    let length = value.chars().count();

    if value.is_empty() {
        Some(FieldError::UsernameRequired)
    } else if length < MIN_USERNAME_LENGTH || length > MAX_USERNAME_LENGTH {
        Some(FieldError::UsernameLength {
            min: MIN_USERNAME_LENGTH,
            max: MAX_USERNAME_LENGTH,
        })
    } else if !USERNAME_PATTERN.is_match(value) {
        Some(FieldError::UsernameCharset)
    } else {
        None
    }
}

fn validate_password(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::PasswordRequired)
    } else if value.chars().count() < MIN_PASSWORD_LENGTH {
        Some(FieldError::PasswordTooShort(MIN_PASSWORD_LENGTH))
    } else {
        None
    }
}

fn validate_confirm_password(password: &str, confirm: &str) -> Option<FieldError> {
    if confirm.is_empty() {
        Some(FieldError::ConfirmPasswordRequired)
    } else if password != confirm {
        Some(FieldError::PasswordMismatch)
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !EMAIL_PATTERN.is_match(value) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn validate_phone(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::PhoneRequired);
    }

    let digits = value.chars().filter(char::is_ascii_digit).count();

    if digits != PHONE_DIGITS {
        Some(FieldError::PhoneLength(PHONE_DIGITS))
    } else {
        None
    }
}

/// Birth date is optional. A present value must parse as `YYYY-MM-DD`, and
/// the age is computed from calendar years only: month and day are ignored,
/// so someone turning 13 later this year already passes.
fn validate_birth_date(value: &str, today: NaiveDate) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }

    let birth = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return Some(FieldError::BirthDateInvalid),
    };

    let age = today.year() - birth.year();

    if age < MIN_AGE_YEARS {
        Some(FieldError::TooYoung(MIN_AGE_YEARS))
    } else {
        None
    }
}
