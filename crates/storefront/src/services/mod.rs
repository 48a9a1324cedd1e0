//! Stateful services.
//!
//! The two stores that own all mutable domain state, plus their error types.

pub mod auth;
pub mod cart;

pub use auth::{AuthError, SessionStore};
pub use cart::CartStore;
