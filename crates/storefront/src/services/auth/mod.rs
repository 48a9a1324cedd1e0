//! Session store.
//!
//! Owns the locally persisted account record and the active session. This
//! is a single-profile demo stand-in for a real account system: registering
//! overwrites whatever profile existed before, and there is no duplicate
//! email check because there is never more than one account.
//!
//! Passwords are hashed with argon2 before they touch storage; the original
//! plaintext exists only inside the [`Registration`] input.

mod error;

pub use error::AuthError;

use std::rc::Rc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;
use tracing::warn;

use stylestore_core::Email;

use crate::models::{Registration, UserProfile};
use crate::persist::{self, KeyValueStore, PersistError, keys};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// The session store.
pub struct SessionStore {
    kv: Rc<dyn KeyValueStore>,
    /// The persisted account record, if one exists.
    stored: Option<UserProfile>,
    /// The profile of the active session, if logged in.
    current: Option<UserProfile>,
}

impl SessionStore {
    /// Load the stored account record, if any. Sessions never survive a
    /// restart; the store always starts logged out.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Storage`] if the store cannot be read, or
    /// [`PersistError::DataCorruption`] if the stored profile does not decode.
    pub fn load(kv: Rc<dyn KeyValueStore>) -> Result<Self, PersistError> {
        let stored = persist::load_json(kv.as_ref(), keys::USER)?;
        Ok(Self {
            kv,
            stored,
            current: None,
        })
    }

    /// Register a new account and log it in.
    ///
    /// Overwrites any previously stored profile. The persistence write is
    /// best-effort: a failure is logged and the in-memory account remains
    /// usable for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] if the email does not parse, or
    /// [`AuthError::WeakPassword`] if the password is too short.
    pub fn register(&mut self, registration: Registration) -> Result<UserProfile, AuthError> {
        let email = Email::parse(registration.email.trim())?;

        let password = registration.password.expose_secret();
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let profile = UserProfile {
            email,
            password_hash,
            first_name: registration.first_name,
            last_name: registration.last_name,
            phone: registration.phone,
            address: registration.address,
            city: registration.city,
            zip: registration.zip,
        };

        if let Err(e) = persist::store_json(self.kv.as_ref(), keys::USER, &profile) {
            warn!(error = %e, "failed to persist profile; account will not survive a restart");
        }

        self.stored = Some(profile.clone());
        self.current = Some(profile.clone());
        Ok(profile)
    }

    /// Log in with email and password.
    ///
    /// Succeeds only when an account is stored and both the email
    /// (case-sensitive, exact) and the password match it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any mismatch or when no
    /// account exists - without revealing which.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let Some(stored) = &self.stored else {
            return Err(AuthError::InvalidCredentials);
        };

        if stored.email.as_str() != email {
            return Err(AuthError::InvalidCredentials);
        }

        verify_password(password, &stored.password_hash)?;

        let profile = stored.clone();
        self.current = Some(profile.clone());
        Ok(profile)
    }

    /// End the active session.
    ///
    /// The stored account record is left intact, so logging in again works
    /// without re-registering.
    pub fn logout(&mut self) {
        self.current = None;
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The profile of the active session, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Whether an account record is stored (logged in or not).
    #[must_use]
    pub fn has_account(&self) -> bool {
        self.stored.is_some()
    }
}

/// Check password requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with argon2 and a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
