//! Catalog browsing commands.

// Listing output is the point of these commands.
#![allow(clippy::print_stdout)]

use stylestore_core::ProductId;
use stylestore_storefront::catalog::SortKey;
use stylestore_storefront::{AppError, Storefront};

/// List products, optionally filtered by category and reordered.
pub fn list(
    storefront: &Storefront,
    category: Option<&str>,
    sort: &str,
) -> Result<(), AppError> {
    let key: SortKey = sort.parse().map_err(AppError::BadRequest)?;

    let products = storefront.catalog().browse(category, key);

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    println!(
        "{:>3}  {:<40} {:<12} {:>9}  {:<6} {:>7}",
        "ID", "Name", "Category", "Price", "Stock", "Rating"
    );
    for product in &products {
        println!(
            "{:>3}  {:<40} {:<12} {:>9}  {:<6} {:>7}",
            product.id,
            product.name,
            product.category,
            product.price.to_string(),
            if product.in_stock { "yes" } else { "no" },
            format!("{:.1}", product.rating),
        );
    }
    println!("\nShowing {} products", products.len());
    Ok(())
}

/// Show the detail view for a single product.
pub fn show(storefront: &Storefront, id: i32) -> Result<(), AppError> {
    let product = storefront
        .catalog()
        .get(ProductId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    println!("{}", product.name);
    println!("{}", product.description);
    println!();
    println!("Price:    {}", product.price);
    println!("Category: {}", product.category);
    println!(
        "Rating:   {:.1} ({} reviews)",
        product.rating, product.reviews
    );
    println!(
        "Stock:    {}",
        if product.in_stock {
            "in stock"
        } else {
            "out of stock"
        }
    );
    Ok(())
}
