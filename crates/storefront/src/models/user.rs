//! User domain types.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use stylestore_core::Email;

/// The locally stored account record.
///
/// At most one profile exists at a time; registering again overwrites it.
/// The password is persisted only as an argon2 hash - the plaintext never
/// reaches storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Email address, the login key.
    pub email: Email,
    /// Argon2 hash of the account password.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Zip code.
    pub zip: String,
}

impl UserProfile {
    /// "First Last", as shown on invoices and prefilled card names.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated registration input.
///
/// Built from a registration form after field validation; the password stays
/// wrapped in [`SecretString`] until it is hashed.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Email address.
    pub email: String,
    /// Plaintext password, redacted in debug output.
    pub password: SecretString,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Zip code.
    pub zip: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let profile = UserProfile {
            email: Email::parse("jane@example.com").unwrap(),
            password_hash: "hash".to_owned(),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            phone: "555-0100".to_owned(),
            address: "1 Main St".to_owned(),
            city: "Springfield".to_owned(),
            zip: "01101".to_owned(),
        };
        assert_eq!(profile.full_name(), "Jane Doe");
    }

    #[test]
    fn test_registration_debug_redacts_password() {
        let reg = Registration {
            email: "jane@example.com".to_owned(),
            password: SecretString::from("hunter2".to_owned()),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
        };
        let debug = format!("{reg:?}");
        assert!(!debug.contains("hunter2"));
    }
}
