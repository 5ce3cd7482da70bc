//! The transient registration record

use serde::{Deserialize, Serialize};

use super::field::{FieldId, FormFields};

/// A snapshot of the registration form, built fresh for each validate or
/// submit call and discarded afterwards.
///
/// Name, contact and address fields are read trimmed; the password pair is
/// taken verbatim (leading or trailing spaces in a password are the user's
/// own), and so are the date and select values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: String,
    pub gender: String,
}

impl RegistrationRecord {
    /// Read the current form values into a record.
    pub fn from_fields(form: &dyn FormFields) -> Self {
        let trimmed = |field: FieldId| form.value(field).trim().to_string();

        Self {
            first_name: trimmed(FieldId::FirstName),
            last_name: trimmed(FieldId::LastName),
            username: trimmed(FieldId::Username),
            password: form.value(FieldId::Password),
            confirm_password: form.value(FieldId::ConfirmPassword),
            email: trimmed(FieldId::Email),
            phone: trimmed(FieldId::Phone),
            address: trimmed(FieldId::Address),
            birth_date: form.value(FieldId::BirthDate),
            gender: form.value(FieldId::Gender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::field::MapForm;

    #[test]
    fn test_extraction_trims_identity_fields_only() {
        let form = MapForm::new()
            .set(FieldId::FirstName, "  Fatimah ")
            .set(FieldId::Username, " member01 ")
            .set(FieldId::Password, " secret pass ")
            .set(FieldId::ConfirmPassword, " secret pass ")
            .set(FieldId::Email, " fatimah@example.com ");

        let record = RegistrationRecord::from_fields(&form);

        assert_eq!(record.first_name, "Fatimah");
        assert_eq!(record.username, "member01");
        assert_eq!(record.email, "fatimah@example.com");
        // Passwords keep their surrounding whitespace.
        assert_eq!(record.password, " secret pass ");
        assert_eq!(record.confirm_password, " secret pass ");
    }

    #[test]
    fn test_extraction_defaults_missing_fields_to_empty() {
        let form = MapForm::new();
        let record = RegistrationRecord::from_fields(&form);
        assert_eq!(record, RegistrationRecord::default());
    }
}
