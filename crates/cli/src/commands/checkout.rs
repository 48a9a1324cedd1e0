//! Checkout command.
//!
//! Mirrors the storefront's "login to checkout" gate: credentials are
//! required, the session is started, and the payment form prefills from the
//! profile before validation runs.

#![allow(clippy::print_stdout)]

use clap::Args;

use stylestore_storefront::validation::{LoginForm, PaymentForm};
use stylestore_storefront::{AppError, Storefront};

use super::account::report_field_errors;

/// Arguments for `stylestore checkout`.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Account email (checkout requires login)
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Card number, spaces allowed
    #[arg(long)]
    pub card_number: String,

    /// Card expiry, MM/YY
    #[arg(long)]
    pub expiry: String,

    /// Card verification value
    #[arg(long)]
    pub cvv: String,

    /// Name on the card; defaults to the profile name
    #[arg(long)]
    pub name: Option<String>,

    /// Shipping address; defaults to the profile address
    #[arg(long)]
    pub address: Option<String>,

    /// Shipping city; defaults to the profile city
    #[arg(long)]
    pub city: Option<String>,

    /// Shipping zip code; defaults to the profile zip
    #[arg(long)]
    pub zip: Option<String>,
}

/// Run the checkout flow.
pub fn run(storefront: &mut Storefront, args: CheckoutArgs) -> Result<(), AppError> {
    let login = LoginForm {
        email: args.email,
        password: args.password,
    };
    let profile = storefront.login(&login)?;

    let form = PaymentForm {
        name: args.name.unwrap_or_default(),
        card_number: args.card_number,
        expiry_date: args.expiry,
        cvv: args.cvv,
        shipping_address: args.address.unwrap_or_default(),
        shipping_city: args.city.unwrap_or_default(),
        shipping_zip: args.zip.unwrap_or_default(),
    }
    .with_profile_defaults(&profile);

    let order_id = storefront.checkout(&form).map_err(report_field_errors)?;
    tracing::info!("Payment accepted; order {order_id} created");

    let invoice = storefront.invoice(order_id)?;
    println!("{invoice}");
    Ok(())
}
