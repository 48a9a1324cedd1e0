//! Persistence port for storefront state.
//!
//! All persisted state lives in a string-keyed key-value store with
//! JSON-encoded values:
//!
//! - [`keys::USER`] - the stored [`UserProfile`](crate::models::UserProfile),
//!   or absent when no account exists
//! - [`keys::CART`] - the ordered array of cart lines
//! - [`keys::ORDERS`] - the append-only array of completed orders
//!
//! Absence of a key means "empty collection" / "no session", never an error.
//! The port keeps the stores testable against [`MemoryStore`] and swappable
//! for a real backend later.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Persisted state keys.
pub mod keys {
    /// Key for the stored user profile.
    pub const USER: &str = "user";

    /// Key for the active cart's line items.
    pub const CART: &str = "cart";

    /// Key for the completed order history.
    pub const ORDERS: &str = "orders";
}

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the underlying storage failed.
    #[error("storage error for key {key:?}: {source}")]
    Storage {
        /// The key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded.
    ///
    /// On reads this means the stored record is corrupt; callers should
    /// surface it rather than silently dropping state.
    #[error("corrupt data under key {key:?}: {message}")]
    DataCorruption {
        /// The key holding the bad value.
        key: String,
        /// What went wrong.
        message: String,
    },
}

/// A string-keyed key-value store with JSON string values.
///
/// Implementations take `&self`; interior mutability (or the filesystem) is
/// an implementation concern. The storefront runs single-threaded, so no
/// locking is required.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Storage`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Storage`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Storage`] if the backing storage cannot be written.
    fn delete(&self, key: &str) -> Result<(), PersistError>;
}

/// Load and decode the JSON value stored under `key`.
///
/// An absent key decodes to `None`, not an error.
///
/// # Errors
///
/// Returns [`PersistError::Storage`] if the store cannot be read, or
/// [`PersistError::DataCorruption`] if the stored JSON does not decode.
pub fn load_json<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, PersistError> {
    let Some(raw) = kv.get(key)? else {
        return Ok(None);
    };

    let value = serde_json::from_str(&raw).map_err(|e| PersistError::DataCorruption {
        key: key.to_owned(),
        message: e.to_string(),
    })?;

    Ok(Some(value))
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`PersistError::Storage`] if the store cannot be written, or
/// [`PersistError::DataCorruption`] if the value does not encode.
pub fn store_json<T: Serialize + ?Sized>(
    kv: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), PersistError> {
    let raw = serde_json::to_string(value).map_err(|e| PersistError::DataCorruption {
        key: key.to_owned(),
        message: e.to_string(),
    })?;

    kv.set(key, &raw)
}
