//! StyleStore storefront core.
//!
//! The stateful heart of the storefront: product catalog, cart/order
//! lifecycle, session handling, derived totals, form validation, checkout,
//! and invoice rendering. There is no server and no database - all state is
//! persisted through a string-keyed [`persist::KeyValueStore`] port with
//! JSON-encoded values, standing in for a backend.
//!
//! # Architecture
//!
//! Two stores own all mutable state:
//!
//! - [`services::cart::CartStore`] - the active cart plus the append-only
//!   order history. The only place line items are mutated and totals
//!   snapshotted.
//! - [`services::auth::SessionStore`] - the locally persisted account record
//!   and the active session.
//!
//! Everything else reads from the stores through the [`state::Storefront`]
//! aggregate, which is constructed once and passed by reference - no hidden
//! singletons.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod invoice;
pub mod models;
pub mod persist;
pub mod services;
pub mod state;
pub mod totals;
pub mod validation;

pub use error::{AppError, Result};
pub use state::Storefront;
