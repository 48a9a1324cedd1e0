//! Completed orders and their payment/shipping summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stylestore_core::{OrderId, OrderStatus, Price};

use super::cart::CartLine;

/// Payment details stored with an order.
///
/// Only the last four card digits are ever recorded - never the full card
/// number or the CVV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Last four digits of the card number.
    pub card_last4: String,
    /// Name on the card.
    pub name_on_card: String,
    /// When the (simulated) payment happened.
    pub paid_at: DateTime<Utc>,
}

/// Shipping destination stored with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingSummary {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Zip code.
    pub zip: String,
}

/// A completed order.
///
/// An immutable snapshot taken from the cart at creation time: the line
/// items and subtotal are fixed from that moment and unaffected by any later
/// cart or catalog changes. Orders accumulate in an append-only list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Globally unique identifier, generated at creation.
    pub id: OrderId,
    /// Snapshot of the cart's lines at creation.
    pub items: Vec<CartLine>,
    /// Sum of line totals over the snapshot, using the snapshotted prices.
    pub subtotal: Price,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// Order status; fixed at `completed`.
    pub status: OrderStatus,
    /// Payment summary.
    pub payment: PaymentSummary,
    /// Shipping summary.
    pub shipping: ShippingSummary,
}

impl Order {
    /// Total number of units across the snapshotted lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
