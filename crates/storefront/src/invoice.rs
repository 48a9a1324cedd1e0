//! Invoice rendering.
//!
//! Builds a display-ready view of a completed order: invoice number,
//! long-form date, bill-to / ship-to / payment blocks, line items, and the
//! checkout totals (tax included). The `Display` impl renders the plain-text
//! layout the CLI prints; richer front ends can read the fields directly.

use stylestore_core::{OrderId, OrderStatus, Price};

use crate::models::{Order, ShippingSummary, UserProfile};
use crate::totals::Totals;

/// Company details printed in the invoice header and footer.
pub mod company {
    /// Street address line.
    pub const ADDRESS: &str = "123 Fashion Avenue";
    /// City line.
    pub const CITY_LINE: &str = "New York, NY 10001";
    /// Support email address.
    pub const SUPPORT_EMAIL: &str = "support@stylestore.com";
    /// Support phone number.
    pub const SUPPORT_PHONE: &str = "(555) 123-4567";
}

/// One line item on an invoice.
#[derive(Debug, Clone)]
pub struct InvoiceLine {
    /// Product name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Units ordered.
    pub quantity: u32,
    /// Price per unit at order time.
    pub unit_price: Price,
    /// Unit price times quantity.
    pub line_total: Price,
}

/// Billing identity block, present when a customer is logged in.
#[derive(Debug, Clone)]
pub struct BillTo {
    /// Customer full name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    pub phone: String,
}

/// A display-ready invoice for a completed order.
#[derive(Debug, Clone)]
pub struct Invoice {
    /// Store name shown in the header.
    pub store_name: String,
    /// Human-facing invoice number (short form of the order id).
    pub number: String,
    /// The full order id.
    pub order_id: OrderId,
    /// Long-form order date, e.g. "August 7, 2026".
    pub date: String,
    /// Order status badge.
    pub status: OrderStatus,
    /// Billing block, when a customer session is active.
    pub bill_to: Option<BillTo>,
    /// Shipping destination.
    pub ship_to: ShippingSummary,
    /// Last four digits of the card charged.
    pub card_last4: String,
    /// Name on the card.
    pub name_on_card: String,
    /// Line items from the order snapshot.
    pub lines: Vec<InvoiceLine>,
    /// Checkout totals (tax included).
    pub totals: Totals,
}

impl Invoice {
    /// Build an invoice from an order and the active customer, if any.
    #[must_use]
    pub fn build(store_name: &str, order: &Order, customer: Option<&UserProfile>) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| InvoiceLine {
                name: item.name.clone(),
                category: item.category.clone(),
                quantity: item.quantity,
                unit_price: item.price,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            store_name: store_name.to_owned(),
            number: order.id.short(),
            order_id: order.id,
            date: order.created_at.format("%B %-d, %Y").to_string(),
            status: order.status,
            bill_to: customer.map(|profile| BillTo {
                name: profile.full_name(),
                email: profile.email.to_string(),
                phone: profile.phone.clone(),
            }),
            ship_to: order.shipping.clone(),
            card_last4: order.payment.card_last4.clone(),
            name_on_card: order.payment.name_on_card.clone(),
            lines,
            totals: Totals::checkout(order.subtotal),
        }
    }
}

impl std::fmt::Display for Invoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.store_name)?;
        writeln!(f, "{}", company::ADDRESS)?;
        writeln!(f, "{}", company::CITY_LINE)?;
        writeln!(f, "{}", company::SUPPORT_EMAIL)?;
        writeln!(f)?;
        writeln!(f, "Invoice #: {}", self.number)?;
        writeln!(f, "Date:      {}", self.date)?;
        writeln!(f, "Status:    {}", self.status)?;
        writeln!(f)?;

        if let Some(bill_to) = &self.bill_to {
            writeln!(f, "Bill To:  {}", bill_to.name)?;
            writeln!(f, "          {}", bill_to.email)?;
            writeln!(f, "          {}", bill_to.phone)?;
        }
        writeln!(f, "Ship To:  {}", self.ship_to.address)?;
        writeln!(f, "          {}, {}", self.ship_to.city, self.ship_to.zip)?;
        writeln!(f, "Payment:  Card ending in {}", self.card_last4)?;
        writeln!(f, "          Name: {}", self.name_on_card)?;
        writeln!(f)?;

        for line in &self.lines {
            writeln!(
                f,
                "{:>3} x {:<40} {:>10} {:>10}",
                line.quantity,
                line.name,
                line.unit_price.to_string(),
                line.line_total.to_string()
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Subtotal:  {}", self.totals.subtotal)?;
        if let Some(tax) = self.totals.tax {
            writeln!(f, "Tax (5%):  {tax}")?;
        }
        writeln!(f, "Shipping:  {}", self.totals.shipping)?;
        writeln!(f, "Total:     {}", self.totals.total)?;
        writeln!(f)?;
        writeln!(f, "Thank you for your purchase!")?;
        write!(
            f,
            "For any questions regarding this invoice, please contact {} or call {}",
            company::SUPPORT_EMAIL,
            company::SUPPORT_PHONE
        )
    }
}
