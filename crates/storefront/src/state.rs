//! Application state shared across views.
//!
//! The [`Storefront`] aggregate owns the catalog and both stores. It is
//! constructed once at session start from configuration plus an injected
//! persistence port, and passed by reference to every view or command that
//! needs it - there are no ambient globals.

use std::rc::Rc;

use stylestore_core::OrderId;

use crate::catalog::Catalog;
use crate::checkout;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::invoice::Invoice;
use crate::models::UserProfile;
use crate::persist::KeyValueStore;
use crate::services::{CartStore, SessionStore};
use crate::validation::{
    LoginForm, PaymentForm, RegistrationForm, validate_login, validate_registration,
};

/// The storefront session: configuration, catalog, and the two stores.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    session: SessionStore,
}

impl Storefront {
    /// Create a storefront with the built-in catalog, loading persisted
    /// state through the given key-value store.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted state cannot be read or does not decode.
    pub fn new(config: StorefrontConfig, kv: Rc<dyn KeyValueStore>) -> Result<Self> {
        Self::with_catalog(config, kv, Catalog::builtin())
    }

    /// Create a storefront with a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted state cannot be read or does not decode.
    pub fn with_catalog(
        config: StorefrontConfig,
        kv: Rc<dyn KeyValueStore>,
        catalog: Catalog,
    ) -> Result<Self> {
        let cart = CartStore::load(Rc::clone(&kv))?;
        let session = SessionStore::load(kv)?;
        Ok(Self {
            config,
            catalog,
            cart,
            session,
        })
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart/order store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart/order store.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Mutable access to the session store.
    pub const fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Validate a registration form and create the account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with per-field messages before any
    /// store mutation, or [`AppError::Auth`] from the session store.
    pub fn register(&mut self, form: RegistrationForm) -> Result<UserProfile> {
        let errors = validate_registration(&form);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(self.session.register(form.into_registration())?)
    }

    /// Validate a login form and start a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input, or
    /// [`AppError::Auth`] with a generic invalid-credentials failure.
    pub fn login(&mut self, form: &LoginForm) -> Result<UserProfile> {
        let errors = validate_login(form);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(self.session.login(&form.email, &form.password)?)
    }

    /// End the active session. The stored account survives.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Validate the payment form and turn the cart into a completed order.
    ///
    /// # Errors
    ///
    /// See [`checkout::place_order`].
    pub fn checkout(&mut self, form: &PaymentForm) -> Result<OrderId> {
        checkout::place_order(&mut self.cart, form)
    }

    /// Render the invoice for a completed order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown order id - a normal
    /// navigation case, e.g. a stale invoice link.
    pub fn invoice(&self, order_id: OrderId) -> Result<Invoice> {
        let order = self
            .cart
            .get_order(order_id)
            .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;
        Ok(Invoice::build(
            &self.config.store_name,
            order,
            self.session.current_user(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use stylestore_core::{OrderId, ProductId};

    fn storefront() -> Storefront {
        let kv = Rc::new(MemoryStore::new()) as Rc<dyn KeyValueStore>;
        Storefront::new(StorefrontConfig::default(), kv).unwrap()
    }

    fn payment_form() -> PaymentForm {
        PaymentForm {
            name: "Jane Doe".to_owned(),
            card_number: "4242424242424242".to_owned(),
            expiry_date: "12/28".to_owned(),
            cvv: "123".to_owned(),
            shipping_address: "1 Main St".to_owned(),
            shipping_city: "Springfield".to_owned(),
            shipping_zip: "01101".to_owned(),
        }
    }

    #[test]
    fn test_checkout_then_invoice() {
        let mut store = storefront();
        let shirt = store.catalog().get(ProductId::new(2)).unwrap().clone();
        store.cart_mut().add_item(&shirt, 2);

        let order_id = store.checkout(&payment_form()).unwrap();
        assert!(store.cart().is_empty());

        let invoice = store.invoice(order_id).unwrap();
        assert_eq!(invoice.totals.subtotal.to_string(), "$59.98");
        assert!(invoice.bill_to.is_none());
    }

    #[test]
    fn test_invoice_unknown_order_is_not_found() {
        let store = storefront();
        let err = store.invoice(OrderId::generate()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_register_validates_before_mutating() {
        let mut store = storefront();
        let err = store.register(RegistrationForm::default()).unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(!store.session().has_account());
    }

    #[test]
    fn test_login_failure_keeps_session_unauthenticated() {
        let mut store = storefront();
        let form = LoginForm {
            email: "a@b.com".to_owned(),
            password: "x".to_owned(),
        };
        assert!(store.login(&form).is_err());
        assert!(!store.session().is_authenticated());
    }
}
