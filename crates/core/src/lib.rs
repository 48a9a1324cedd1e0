//! StyleStore Core - Shared types library.
//!
//! This crate provides common types used across all StyleStore components:
//! - `storefront` - Cart, session, and catalog stores
//! - `cli` - Command-line storefront driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no command
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
