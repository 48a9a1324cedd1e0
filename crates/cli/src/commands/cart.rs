//! Cart management commands.

#![allow(clippy::print_stdout)]

use clap::Subcommand;

use stylestore_core::ProductId;
use stylestore_storefront::totals::Totals;
use stylestore_storefront::{AppError, Storefront};

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart with its running totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: i32,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: i32,
    },
    /// Set the quantity of a product already in the cart
    SetQuantity {
        /// Product ID
        product_id: i32,

        /// New quantity; 0 removes the line
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

/// Run a cart subcommand.
pub fn run(storefront: &mut Storefront, action: CartAction) -> Result<(), AppError> {
    match action {
        CartAction::Show => show(storefront),
        CartAction::Add {
            product_id,
            quantity,
        } => {
            let id = ProductId::new(product_id);
            let product = storefront
                .catalog()
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?
                .clone();
            storefront.cart_mut().add_item(&product, quantity);
            tracing::info!("Added {} x {}", quantity, product.name);
            show(storefront)
        }
        CartAction::Remove { product_id } => {
            storefront.cart_mut().remove_item(ProductId::new(product_id));
            show(storefront)
        }
        CartAction::SetQuantity {
            product_id,
            quantity,
        } => {
            storefront
                .cart_mut()
                .update_quantity(ProductId::new(product_id), quantity);
            show(storefront)
        }
        CartAction::Clear => {
            storefront.cart_mut().clear();
            tracing::info!("Cart cleared");
            Ok(())
        }
    }
}

fn show(storefront: &Storefront) -> Result<(), AppError> {
    let cart = storefront.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    println!(
        "{:>3}  {:<40} {:>9} {:>4} {:>10}",
        "ID", "Product", "Price", "Qty", "Total"
    );
    for line in cart.lines() {
        println!(
            "{:>3}  {:<40} {:>9} {:>4} {:>10}",
            line.product_id,
            line.name,
            line.price.to_string(),
            line.quantity,
            line.line_total().to_string(),
        );
    }

    // Cart-page totals: shipping, no tax yet.
    let totals = Totals::cart(cart.subtotal());
    println!();
    println!("Items:    {}", cart.item_count());
    println!("Subtotal: {}", totals.subtotal);
    println!("Shipping: {}", totals.shipping);
    println!("Total:    {}", totals.total);
    Ok(())
}
