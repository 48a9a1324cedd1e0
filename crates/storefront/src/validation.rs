//! Form validation.
//!
//! Validation runs before any store mutation and reports per-field messages;
//! it never panics and is never expressed as a fault on the mutation path.
//! Field names and messages match what the pages display next to each input.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use secrecy::SecretString;

use stylestore_core::Email;

use crate::models::Registration;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EXPIRY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("hard-coded pattern"));
static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("hard-coded pattern"));
static CVV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("hard-coded pattern"));

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    /// Record a message for `field`. The first message per field wins,
    /// matching how the pages short-circuit per-field checks.
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterate over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw input from the registration page.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl RegistrationForm {
    /// Convert a validated form into registration input for the session
    /// store, moving the password behind [`SecretString`].
    #[must_use]
    pub fn into_registration(self) -> Registration {
        Registration {
            email: self.email,
            password: SecretString::from(self.password),
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            address: self.address,
            city: self.city,
            zip: self.zip,
        }
    }
}

/// Raw input from the login page.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw input from the payment page.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    /// Name on the card.
    pub name: String,
    /// Card number; spaces are tolerated and stripped.
    pub card_number: String,
    /// Expiry in `MM/YY` form.
    pub expiry_date: String,
    /// Card verification value. Validated, never stored.
    pub cvv: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_zip: String,
}

impl PaymentForm {
    /// Fill empty name and shipping fields from the stored profile, as the
    /// payment page does for a logged-in customer.
    #[must_use]
    pub fn with_profile_defaults(mut self, profile: &crate::models::UserProfile) -> Self {
        if self.name.trim().is_empty() {
            self.name = profile.full_name();
        }
        if self.shipping_address.trim().is_empty() {
            self.shipping_address = profile.address.clone();
        }
        if self.shipping_city.trim().is_empty() {
            self.shipping_city = profile.city.clone();
        }
        if self.shipping_zip.trim().is_empty() {
            self.shipping_zip = profile.zip.clone();
        }
        self
    }
}

/// Strip whitespace out of a card number as typed ("4242 4242 ..." forms).
#[must_use]
pub fn clean_card_number(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate the registration form.
#[must_use]
pub fn validate_registration(form: &RegistrationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.first_name.trim().is_empty() {
        errors.add("first_name", "First name is required");
    }

    if form.last_name.trim().is_empty() {
        errors.add("last_name", "Last name is required");
    }

    validate_email_field(&mut errors, &form.email);

    if form.password.is_empty() {
        errors.add("password", "Password is required");
    } else if form.password.len() < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }

    if form.password != form.confirm_password {
        errors.add("confirm_password", "Passwords do not match");
    }

    if form.phone.trim().is_empty() {
        errors.add("phone", "Phone number is required");
    }

    if form.address.trim().is_empty() {
        errors.add("address", "Address is required");
    }

    if form.city.trim().is_empty() {
        errors.add("city", "City is required");
    }

    if form.zip.trim().is_empty() {
        errors.add("zip", "Zip code is required");
    }

    errors
}

/// Validate the login form.
#[must_use]
pub fn validate_login(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    validate_email_field(&mut errors, &form.email);

    if form.password.is_empty() {
        errors.add("password", "Password is required");
    }

    errors
}

/// Validate the payment form.
#[must_use]
pub fn validate_payment(form: &PaymentForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.trim().is_empty() {
        errors.add("name", "Name is required");
    }

    let card = clean_card_number(&form.card_number);
    if card.is_empty() {
        errors.add("card_number", "Card number is required");
    } else if !CARD_NUMBER.is_match(&card) {
        errors.add("card_number", "Invalid card number");
    }

    if form.expiry_date.trim().is_empty() {
        errors.add("expiry_date", "Expiry date is required");
    } else if !EXPIRY_DATE.is_match(&form.expiry_date) {
        errors.add("expiry_date", "Invalid format (MM/YY)");
    }

    if form.cvv.trim().is_empty() {
        errors.add("cvv", "CVV is required");
    } else if !CVV.is_match(&form.cvv) {
        errors.add("cvv", "Invalid CVV");
    }

    if form.shipping_address.trim().is_empty() {
        errors.add("shipping_address", "Shipping address is required");
    }

    if form.shipping_city.trim().is_empty() {
        errors.add("shipping_city", "City is required");
    }

    if form.shipping_zip.trim().is_empty() {
        errors.add("shipping_zip", "Zip code is required");
    }

    errors
}

fn validate_email_field(errors: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if Email::parse(email.trim()).is_err() {
        errors.add("email", "Email is invalid");
    }
}
