//! Stored member records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::form::RegistrationRecord;

/// What gets persisted in place of the password. The submitted plaintext
/// never reaches the store.
pub const PASSWORD_PLACEHOLDER: &str = "********";

/// Administrative status of a stored member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Awaiting administrator confirmation. Every new record starts here.
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A persisted member record.
///
/// Append-only from this crate's point of view: status transitions belong
/// to the administrator flow. Username and email are unique across the
/// collection, enforced at submission time rather than by the store.
///
/// Serialized field names are camelCase; that is the wire format of the
/// users slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    /// Creation timestamp in milliseconds; monotonic-ish and unique enough
    /// for a single-writer store.
    id: i64,
    first_name: String,
    last_name: String,
    username: String,
    password: String,
    email: String,
    phone: String,
    address: String,
    birth_date: String,
    gender: String,
    registered_at: DateTime<Utc>,
    status: UserStatus,
}

impl StoredUser {
    /// Build a stored record from a validated submission. The confirmation
    /// field is dropped and the password replaced with the placeholder.
    pub fn from_record(record: &RegistrationRecord) -> Self {
        let now = Utc::now();

        Self {
            id: now.timestamp_millis(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            username: record.username.clone(),
            password: PASSWORD_PLACEHOLDER.to_string(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            birth_date: record.birth_date.clone(),
            gender: record.gender.clone(),
            registered_at: now,
            status: UserStatus::Pending,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, email: &str) -> RegistrationRecord {
        RegistrationRecord {
            first_name: "Fatimah".to_string(),
            last_name: "Saelim".to_string(),
            username: username.to_string(),
            password: "Abcdefgh1".to_string(),
            confirm_password: "Abcdefgh1".to_string(),
            email: email.to_string(),
            phone: "0812345678".to_string(),
            ..RegistrationRecord::default()
        }
    }

    #[test]
    fn test_password_is_replaced_with_placeholder() {
        let user = StoredUser::from_record(&record("fatimah01", "f@example.com"));
        assert_eq!(user.password(), PASSWORD_PLACEHOLDER);
    }

    #[test]
    fn test_new_records_start_pending() {
        let user = StoredUser::from_record(&record("fatimah01", "f@example.com"));
        assert_eq!(user.status(), UserStatus::Pending);
        assert!(user.id() > 0);
    }

    #[test]
    fn test_serialized_shape() {
        let user = StoredUser::from_record(&record("fatimah01", "f@example.com"));
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"firstName\":\"Fatimah\""));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"registeredAt\""));
        // The plaintext never appears.
        assert!(!json.contains("Abcdefgh1"));
        // The confirmation field is not part of the stored shape.
        assert!(!json.contains("confirmPassword"));
    }

    #[test]
    fn test_round_trip() {
        let user = StoredUser::from_record(&record("fatimah01", "f@example.com"));
        let json = serde_json::to_string(&user).unwrap();
        let back: StoredUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
