//! Domain types for the storefront.
//!
//! These are the validated records the stores own and persist, separate from
//! any view or form types.

pub mod cart;
pub mod order;
pub mod user;

pub use cart::CartLine;
pub use order::{Order, PaymentSummary, ShippingSummary};
pub use user::{Registration, UserProfile};
