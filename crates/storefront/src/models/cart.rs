//! Cart line items.

use serde::{Deserialize, Serialize};

use stylestore_core::{Price, ProductId};

use crate::catalog::Product;

/// One product-plus-quantity entry in the cart.
///
/// Carries a denormalized copy of the product's displayable fields taken at
/// the moment of add, so an order snapshot keeps the price the customer saw
/// even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name at time of add.
    pub name: String,
    /// Unit price at time of add.
    pub price: Price,
    /// Product image URL at time of add.
    pub image: String,
    /// Category label at time of add.
    pub category: String,
    /// Number of units. Always at least 1; a line that would drop to zero is
    /// removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Build a line from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
