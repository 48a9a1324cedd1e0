//! Cart and order store.
//!
//! Owns the active cart and the append-only order history. Every mutation
//! persists the cart synchronously; persistence failures on ordinary
//! mutations degrade to warnings (the in-memory cart stays authoritative),
//! while [`CartStore::create_order`] is transactional and rolls back.

use std::rc::Rc;

use chrono::Utc;
use tracing::warn;

use stylestore_core::{OrderId, OrderStatus, Price, ProductId};

use crate::catalog::Product;
use crate::models::{CartLine, Order, PaymentSummary, ShippingSummary};
use crate::persist::{self, KeyValueStore, PersistError, keys};

/// The cart/order store.
///
/// Cart lifecycle: empty, then populated through add/remove/update, then
/// consumed exactly once by [`Self::create_order`], which snapshots the lines
/// into an order and returns the cart to empty. Carts have no expiry; they
/// persist until cleared or consumed.
pub struct CartStore {
    kv: Rc<dyn KeyValueStore>,
    lines: Vec<CartLine>,
    orders: Vec<Order>,
}

impl CartStore {
    /// Load cart and order state from the key-value store.
    ///
    /// Absent keys mean an empty cart and no order history.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Storage`] if the store cannot be read, or
    /// [`PersistError::DataCorruption`] if a stored record does not decode.
    pub fn load(kv: Rc<dyn KeyValueStore>) -> Result<Self, PersistError> {
        let lines = persist::load_json(kv.as_ref(), keys::CART)?.unwrap_or_default();
        let orders = persist::load_json(kv.as_ref(), keys::ORDERS)?.unwrap_or_default();
        Ok(Self { kv, lines, orders })
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All completed orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is appended, copying the product's displayable
    /// fields at this instant. The stock flag is not checked here - gating
    /// out-of-stock products is the product page's concern. Adding zero
    /// units is a no-op.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }

        self.persist_cart();
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
        self.persist_cart();
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity of zero removes the line instead of keeping an empty one.
    /// Updating an absent line is a no-op - it does not insert.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
            self.persist_cart();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist_cart();
    }

    /// Sum of line totals over the current cart, computed fresh on each call
    /// and never cached or rounded.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units in the cart (not the number of lines).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Snapshot the cart into a completed order and empty the cart.
    ///
    /// The order gets a fresh id, a deep copy of the current lines, the
    /// subtotal computed from that snapshot, the current timestamp, and the
    /// given payment and shipping summaries. The operation is atomic from
    /// the caller's perspective: if either persistence write fails, the
    /// first write is compensated and neither the new order nor the emptied
    /// cart is observable - in memory or on reload.
    ///
    /// # Errors
    ///
    /// Returns the persistence error that prevented the order from being
    /// recorded. The cart is left exactly as it was.
    pub fn create_order(
        &mut self,
        payment: PaymentSummary,
        shipping: ShippingSummary,
    ) -> Result<OrderId, PersistError> {
        let order = Order {
            id: OrderId::generate(),
            items: self.lines.clone(),
            subtotal: self.subtotal(),
            created_at: Utc::now(),
            status: OrderStatus::Completed,
            payment,
            shipping,
        };
        let order_id = order.id;

        // Stage the appended order list before touching in-memory state.
        self.orders.push(order);
        if let Err(e) = persist::store_json(self.kv.as_ref(), keys::ORDERS, &self.orders) {
            self.orders.pop();
            return Err(e);
        }

        if let Err(e) = persist::store_json(self.kv.as_ref(), keys::CART, &[] as &[CartLine]) {
            // Compensate the order write so a reload cannot see the order
            // alongside a still-populated cart.
            self.orders.pop();
            if let Err(rollback) =
                persist::store_json(self.kv.as_ref(), keys::ORDERS, &self.orders)
            {
                warn!(error = %rollback, "failed to roll back order write");
            }
            return Err(e);
        }

        self.lines.clear();
        Ok(order_id)
    }

    /// Look up a completed order. Unknown ids are a normal navigation case
    /// (stale invoice links) and yield `None`, never an error.
    #[must_use]
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    fn persist_cart(&self) {
        if let Err(e) = persist::store_json(self.kv.as_ref(), keys::CART, &self.lines) {
            warn!(error = %e, "failed to persist cart; in-memory state remains authoritative");
        }
    }
}
