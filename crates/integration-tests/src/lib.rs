//! Integration tests for StyleStore.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stylestore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_lifecycle` - Cart invariants and the order snapshot lifecycle
//! - `checkout_totals` - Derived-total rules across cart, checkout, invoice
//! - `session_auth` - Registration, login, logout semantics
//! - `persistence` - Round-trips, reloads, and crash consistency
//!
//! This crate's library is test support: a [`TestContext`] wiring a
//! storefront to an in-memory store, form builders, and a [`FlakyStore`]
//! that fails writes on demand.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::Cell;
use std::rc::Rc;

use stylestore_storefront::Storefront;
use stylestore_storefront::config::StorefrontConfig;
use stylestore_storefront::persist::{KeyValueStore, MemoryStore, PersistError};
use stylestore_storefront::validation::{PaymentForm, RegistrationForm};

/// A storefront wired to a shared in-memory store.
pub struct TestContext {
    /// The storefront under test.
    pub storefront: Storefront,
    /// The backing store, kept so tests can inspect raw persisted values or
    /// reload a second storefront over the same state.
    pub kv: Rc<MemoryStore>,
}

impl TestContext {
    /// Create a storefront over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let kv = Rc::new(MemoryStore::new());
        let storefront = Storefront::new(
            StorefrontConfig::default(),
            Rc::clone(&kv) as Rc<dyn KeyValueStore>,
        )
        .expect("fresh memory store always loads");
        Self { storefront, kv }
    }

    /// Reload a second storefront over the same persisted state, as a new
    /// browsing context would.
    #[must_use]
    pub fn reload(&self) -> Storefront {
        Storefront::new(
            StorefrontConfig::default(),
            Rc::clone(&self.kv) as Rc<dyn KeyValueStore>,
        )
        .expect("state persisted by the storefront always reloads")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete, valid registration form for Jane Doe.
#[must_use]
pub fn jane_registration() -> RegistrationForm {
    RegistrationForm {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        phone: "555-0100".to_owned(),
        address: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        zip: "01101".to_owned(),
    }
}

/// A complete, valid payment form.
#[must_use]
pub fn valid_payment() -> PaymentForm {
    PaymentForm {
        name: "Jane Doe".to_owned(),
        card_number: "4242 4242 4242 4242".to_owned(),
        expiry_date: "12/28".to_owned(),
        cvv: "123".to_owned(),
        shipping_address: "1 Main St".to_owned(),
        shipping_city: "Springfield".to_owned(),
        shipping_zip: "01101".to_owned(),
    }
}

/// A key-value store that starts failing writes after a set number of
/// successes. Reads always work.
pub struct FlakyStore {
    inner: MemoryStore,
    writes_left: Cell<u32>,
}

impl FlakyStore {
    /// Allow `writes` successful writes, then fail every one after.
    #[must_use]
    pub fn failing_after(writes: u32) -> Self {
        Self {
            inner: MemoryStore::new(),
            writes_left: Cell::new(writes),
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let left = self.writes_left.get();
        if left == 0 {
            return Err(PersistError::Storage {
                key: key.to_owned(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.writes_left.set(left - 1);
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        self.inner.delete(key)
    }
}
