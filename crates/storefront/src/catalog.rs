//! Static product catalog.
//!
//! Reference data supplied at startup and immutable at runtime. The stores
//! only ever read from it; nothing here persists.

use serde::{Deserialize, Serialize};

use stylestore_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Category label.
    pub category: String,
    /// Whether the product is in stock. Advisory only: the cart does not
    /// enforce it, the product page does.
    pub in_stock: bool,
    /// Whether the product appears in the featured rail.
    pub featured: bool,
    /// Average rating, 0.0-5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
}

/// Sort orders offered by the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Featured products first (the default).
    #[default]
    Featured,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Best rated first.
    Rating,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "rating" => Ok(Self::Rating),
            _ => Err(format!(
                "invalid sort key: {s}. Valid keys: featured, price-low, price-high, rating"
            )),
        }
    }
}

/// An ordered, read-only collection of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products flagged as featured, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Distinct category labels, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// Products in the given category, in catalog order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// The catalog page query: optional category filter, then sort.
    ///
    /// The sort is stable, so ties keep catalog order.
    #[must_use]
    pub fn browse(&self, category: Option<&str>, key: SortKey) -> Vec<&Product> {
        let mut products: Vec<&Product> = match category {
            Some(label) => self.products.iter().filter(|p| p.category == label).collect(),
            None => self.products.iter().collect(),
        };
        match key {
            SortKey::Featured => products.sort_by_key(|p| !p.featured),
            SortKey::PriceLowToHigh => products.sort_by_key(|p| p.price),
            SortKey::PriceHighToLow => products.sort_by_key(|p| std::cmp::Reverse(p.price)),
            SortKey::Rating => products.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        products
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let product = |id: i32,
                       name: &str,
                       description: &str,
                       cents: i64,
                       image: &str,
                       category: &str,
                       rating: f32,
                       reviews: u32| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price: Price::from_cents(cents),
            image: image.to_owned(),
            category: category.to_owned(),
            in_stock: true,
            featured: true,
            rating,
            reviews,
        };

        Self::new(vec![
            product(
                1,
                "Premium Noise-Canceling Headphones",
                "Experience crystal-clear audio with our premium noise-canceling \
                 headphones. Perfect for music enthusiasts and professionals alike.",
                299_99,
                "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "Electronics",
                4.8,
                245,
            ),
            product(
                2,
                "Slim-Fit Casual T-Shirt",
                "A comfortable, breathable slim-fit t-shirt made from premium \
                 cotton. Perfect for everyday casual wear.",
                29_99,
                "https://images.pexels.com/photos/2326595/pexels-photo-2326595.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "Clothing",
                4.5,
                187,
            ),
            product(
                3,
                "Minimalist Ceramic Watch",
                "A sleek, minimalist watch with a ceramic band and sapphire \
                 crystal glass. Water-resistant up to 50 meters.",
                159_99,
                "https://images.pexels.com/photos/1697214/pexels-photo-1697214.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "Accessories",
                4.7,
                132,
            ),
            product(
                4,
                "Organic Skincare Set",
                "A complete skincare set made with organic, cruelty-free \
                 ingredients. Includes cleanser, toner, moisturizer, and serum.",
                89_99,
                "https://images.pexels.com/photos/6621462/pexels-photo-6621462.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "Beauty",
                4.6,
                98,
            ),
            product(
                5,
                "Smart Fitness Tracker",
                "Track your fitness goals with this smart fitness tracker. \
                 Features heart rate monitoring, sleep tracking, and GPS.",
                129_99,
                "https://images.pexels.com/photos/4397840/pexels-photo-4397840.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "Electronics",
                4.4,
                156,
            ),
            product(
                6,
                "Artisanal Coffee Maker",
                "Brew the perfect cup of coffee with this artisanal coffee maker. \
                 Made from sustainable materials and designed for optimal extraction.",
                79_99,
                "https://images.pexels.com/photos/6312187/pexels-photo-6312187.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
                "Home",
                4.9,
                112,
            ),
        ])
    }
}
