//! Derived-total rules across cart, checkout, and invoice views.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use stylestore_core::{Price, ProductId};
use stylestore_integration_tests::{TestContext, jane_registration, valid_payment};
use stylestore_storefront::totals::Totals;

/// cart = [{price: 29.99, qty: 2}, {price: 159.99, qty: 1}]
fn populate_scenario_cart(ctx: &mut TestContext) {
    let shirt = ctx
        .storefront
        .catalog()
        .get(ProductId::new(2))
        .unwrap()
        .clone();
    let watch = ctx
        .storefront
        .catalog()
        .get(ProductId::new(3))
        .unwrap()
        .clone();

    assert_eq!(shirt.price, Price::from_cents(2999));
    assert_eq!(watch.price, Price::from_cents(15999));

    ctx.storefront.cart_mut().add_item(&shirt, 2);
    ctx.storefront.cart_mut().add_item(&watch, 1);
}

#[test]
fn cart_page_totals_charge_shipping_but_no_tax() {
    let mut ctx = TestContext::new();
    populate_scenario_cart(&mut ctx);

    let totals = Totals::cart(ctx.storefront.cart().subtotal());
    assert_eq!(totals.subtotal.to_string(), "$219.97");
    assert_eq!(totals.shipping.to_string(), "$10.00");
    assert_eq!(totals.tax, None);
    assert_eq!(totals.total.to_string(), "$229.97");
}

#[test]
fn checkout_totals_add_five_percent_tax() {
    let mut ctx = TestContext::new();
    populate_scenario_cart(&mut ctx);

    let totals = Totals::checkout(ctx.storefront.cart().subtotal());
    assert_eq!(totals.tax.unwrap().to_string(), "$11.00");
    assert_eq!(totals.total.to_string(), "$240.97");
}

#[test]
fn empty_cart_totals_are_all_zero() {
    let ctx = TestContext::new();
    let subtotal = ctx.storefront.cart().subtotal();

    assert_eq!(subtotal, Price::ZERO);
    let totals = Totals::cart(subtotal);
    assert_eq!(totals.shipping, Price::ZERO);
    assert_eq!(totals.total, Price::ZERO);
}

#[test]
fn invoice_repeats_the_checkout_totals_from_the_snapshot() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();
    populate_scenario_cart(&mut ctx);

    let order_id = ctx.storefront.checkout(&valid_payment()).unwrap();
    let invoice = ctx.storefront.invoice(order_id).unwrap();

    assert_eq!(invoice.totals.subtotal.to_string(), "$219.97");
    assert_eq!(invoice.totals.tax.unwrap().to_string(), "$11.00");
    assert_eq!(invoice.totals.shipping.to_string(), "$10.00");
    assert_eq!(invoice.totals.total.to_string(), "$240.97");

    // Reading the invoice again computes the same numbers - totals are
    // derived fresh from the snapshot, never accumulated in place.
    let again = ctx.storefront.invoice(order_id).unwrap();
    assert_eq!(again.totals.total, invoice.totals.total);
}

#[test]
fn accumulation_is_exact_until_display() {
    let mut ctx = TestContext::new();
    populate_scenario_cart(&mut ctx);

    let totals = Totals::checkout(ctx.storefront.cart().subtotal());
    // 219.97 + 10.00 + 10.9985, exactly.
    assert_eq!(totals.total.amount(), Decimal::new(240_9685, 4));
}

#[test]
fn invoice_bill_to_uses_the_active_session() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();
    populate_scenario_cart(&mut ctx);

    let order_id = ctx.storefront.checkout(&valid_payment()).unwrap();
    let invoice = ctx.storefront.invoice(order_id).unwrap();

    let bill_to = invoice.bill_to.unwrap();
    assert_eq!(bill_to.name, "Jane Doe");
    assert_eq!(bill_to.email, "jane@example.com");

    // After logout the same invoice renders without a billing block.
    ctx.storefront.logout();
    let anonymous = ctx.storefront.invoice(order_id).unwrap();
    assert!(anonymous.bill_to.is_none());
}
