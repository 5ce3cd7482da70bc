//! Form field identities and the form-read seam

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a registration form field.
///
/// `name()` returns the stable element name the page uses for the field,
/// which is also the key under which UI collaborators look fields up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Username,
    Password,
    ConfirmPassword,
    Email,
    Phone,
    Address,
    BirthDate,
    Gender,
}

/// The fixed order in which fields are checked. Aggregate error messages
/// are displayed in this order regardless of which fields failed.
pub const FIELD_CHECK_ORDER: [FieldId; 8] = [
    FieldId::FirstName,
    FieldId::LastName,
    FieldId::Username,
    FieldId::Password,
    FieldId::ConfirmPassword,
    FieldId::Email,
    FieldId::Phone,
    FieldId::BirthDate,
];

impl FieldId {
    /// All fields the registration form carries, including the two
    /// rule-free ones (`address`, `gender`).
    pub const ALL: [FieldId; 10] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Username,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::BirthDate,
        FieldId::Gender,
    ];

    /// The stable element name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read access to the current values of the registration form.
///
/// The pipeline never holds on to a view; it reads all values into a fresh
/// [`RegistrationRecord`](super::RegistrationRecord) at each validate or
/// submit call.
pub trait FormFields: Send + Sync {
    /// Current raw value of the field. Missing fields read as empty.
    fn value(&self, field: FieldId) -> String;
}

/// A plain map-backed form, used wherever no live UI is attached
/// (tests, headless runs).
#[derive(Debug, Clone, Default)]
pub struct MapForm {
    values: HashMap<FieldId, String>,
}

impl MapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }
}

impl FormFields for MapForm {
    fn value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(FieldId::FirstName.name(), "firstName");
        assert_eq!(FieldId::ConfirmPassword.name(), "confirmPassword");
        assert_eq!(FieldId::BirthDate.name(), "birthDate");
    }

    #[test]
    fn test_check_order_is_fixed() {
        assert_eq!(FIELD_CHECK_ORDER[0], FieldId::FirstName);
        assert_eq!(FIELD_CHECK_ORDER[7], FieldId::BirthDate);
        assert!(!FIELD_CHECK_ORDER.contains(&FieldId::Address));
        assert!(!FIELD_CHECK_ORDER.contains(&FieldId::Gender));
    }

    #[test]
    fn test_map_form_missing_field_reads_empty() {
        let form = MapForm::new().set(FieldId::Username, "member01");
        assert_eq!(form.value(FieldId::Username), "member01");
        assert_eq!(form.value(FieldId::Email), "");
    }
}
