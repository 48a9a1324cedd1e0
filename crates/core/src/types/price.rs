//! Type-safe price representation using decimal arithmetic.
//!
//! Prices accumulate unrounded. Rounding to cents happens only at display
//! time, so repeated reads of a derived total can never compound rounding
//! error.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in the store's single currency (USD).
///
/// Multi-currency support is out of scope; the amount is kept in the
/// currency's standard unit (dollars, not cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    ///
    /// ```
    /// use stylestore_core::Price;
    ///
    /// assert_eq!(Price::from_cents(2999).to_string(), "$29.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the exact (unrounded) amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The line total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// The amount rounded to cents, half away from zero.
    ///
    /// Used at display boundaries only; arithmetic stays unrounded.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}
