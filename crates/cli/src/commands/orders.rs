//! Order history commands.

#![allow(clippy::print_stdout)]

use stylestore_core::OrderId;
use stylestore_storefront::{AppError, Storefront};

/// List completed orders, oldest first.
pub fn list(storefront: &Storefront) {
    let orders = storefront.cart().orders();
    if orders.is_empty() {
        println!("No orders yet.");
        return;
    }

    println!(
        "{:<36}  {:<12} {:>5} {:>10}  {}",
        "Order ID", "Date", "Items", "Subtotal", "Status"
    );
    for order in orders {
        println!(
            "{:<36}  {:<12} {:>5} {:>10}  {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.item_count(),
            order.subtotal.to_string(),
            order.status,
        );
    }
}

/// Print the invoice for an order.
pub fn invoice(storefront: &Storefront, raw_id: &str) -> Result<(), AppError> {
    let order_id: OrderId = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("order {raw_id}")))?;

    let invoice = storefront.invoice(order_id)?;
    println!("{invoice}");
    Ok(())
}
