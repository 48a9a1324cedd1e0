//! Derived-total rules.
//!
//! The one place subtotal, shipping, tax, and grand total are computed.
//! Cart, checkout, and invoice views all go through [`Totals`]; nothing else
//! in the crate does money math.
//!
//! Rules:
//! - shipping is a flat $10.00 whenever the subtotal is non-zero
//! - tax is 5% of the subtotal, charged at checkout and on invoices but not
//!   on the cart page
//! - accumulation stays unrounded; rounding to cents happens at display time

use rust_decimal::Decimal;

use stylestore_core::Price;

/// Flat shipping charge applied to any non-empty cart.
#[must_use]
pub fn flat_shipping() -> Price {
    Price::from_cents(10_00)
}

/// Sales tax rate applied at checkout (5%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// A computed set of totals for one of the money-bearing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: Price,
    /// Flat shipping, zero for an empty cart.
    pub shipping: Price,
    /// Sales tax. `None` on the cart page, `Some` at checkout and on
    /// invoices - the asymmetry is deliberate and matches the storefront's
    /// displayed prices.
    pub tax: Option<Price>,
    /// Grand total: subtotal + shipping + tax (where charged).
    pub total: Price,
}

impl Totals {
    /// Totals as shown on the cart page: subtotal + shipping, no tax yet.
    #[must_use]
    pub fn cart(subtotal: Price) -> Self {
        let shipping = shipping_for(subtotal);
        Self {
            subtotal,
            shipping,
            tax: None,
            total: subtotal + shipping,
        }
    }

    /// Totals as charged at checkout and printed on invoices: subtotal +
    /// shipping + 5% tax.
    #[must_use]
    pub fn checkout(subtotal: Price) -> Self {
        let shipping = shipping_for(subtotal);
        let tax = Price::new(subtotal.amount() * tax_rate());
        Self {
            subtotal,
            shipping,
            tax: Some(tax),
            total: subtotal + shipping + tax,
        }
    }
}

fn shipping_for(subtotal: Price) -> Price {
    if subtotal.is_positive() {
        flat_shipping()
    } else {
        Price::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_totals_omit_tax() {
        // cart = [{29.99 x2}, {159.99 x1}]
        let subtotal = Price::from_cents(2999).times(2) + Price::from_cents(15999);
        let totals = Totals::cart(subtotal);

        assert_eq!(totals.subtotal.to_string(), "$219.97");
        assert_eq!(totals.shipping.to_string(), "$10.00");
        assert_eq!(totals.tax, None);
        assert_eq!(totals.total.to_string(), "$229.97");
    }

    #[test]
    fn test_checkout_totals_include_tax() {
        let subtotal = Price::from_cents(2999).times(2) + Price::from_cents(15999);
        let totals = Totals::checkout(subtotal);

        assert_eq!(totals.subtotal.to_string(), "$219.97");
        assert_eq!(totals.shipping.to_string(), "$10.00");
        // 5% of 219.97 = 10.9985, shown as 11.00
        assert_eq!(totals.tax.unwrap().to_string(), "$11.00");
        // 219.97 + 10 + 10.9985 = 240.9685, shown as 240.97
        assert_eq!(totals.total.to_string(), "$240.97");
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let cart = Totals::cart(Price::ZERO);
        assert_eq!(cart.subtotal, Price::ZERO);
        assert_eq!(cart.shipping, Price::ZERO);
        assert_eq!(cart.total, Price::ZERO);

        let checkout = Totals::checkout(Price::ZERO);
        assert_eq!(checkout.shipping, Price::ZERO);
        assert_eq!(checkout.tax, Some(Price::ZERO));
        assert_eq!(checkout.total, Price::ZERO);
    }

    #[test]
    fn test_tax_not_compounded_by_repeated_reads() {
        let subtotal = Price::from_cents(21997);
        let first = Totals::checkout(subtotal);
        let second = Totals::checkout(subtotal);
        assert_eq!(first, second);
        // The unrounded value is preserved exactly.
        assert_eq!(
            first.total.amount(),
            Decimal::new(240_9685, 4)
        );
    }
}
