//! Checkout flow.
//!
//! Validates the payment form, derives the payment and shipping summaries
//! stored with the order, and hands off to the cart store's order creation.
//! Only the last four card digits survive past this module; the full number
//! and the CVV are dropped on the floor once validated.

use chrono::Utc;

use stylestore_core::OrderId;

use crate::error::AppError;
use crate::models::{PaymentSummary, ShippingSummary};
use crate::services::CartStore;
use crate::validation::{PaymentForm, clean_card_number, validate_payment};

/// Validate the payment form and turn the cart into a completed order.
///
/// Validation happens before any store mutation; a failing form leaves the
/// cart untouched.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with per-field messages if the form is
/// invalid, or [`AppError::Persist`] if the order could not be recorded (in
/// which case the cart is also untouched).
pub fn place_order(cart: &mut CartStore, form: &PaymentForm) -> Result<OrderId, AppError> {
    let errors = validate_payment(form);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let card = clean_card_number(&form.card_number);
    let card_last4 = card.chars().skip(card.chars().count().saturating_sub(4)).collect();

    let payment = PaymentSummary {
        card_last4,
        name_on_card: form.name.trim().to_owned(),
        paid_at: Utc::now(),
    };

    let shipping = ShippingSummary {
        address: form.shipping_address.trim().to_owned(),
        city: form.shipping_city.trim().to_owned(),
        zip: form.shipping_zip.trim().to_owned(),
    };

    let order_id = cart.create_order(payment, shipping)?;
    Ok(order_id)
}
