//! Round-trips, reloads, and crash consistency.

#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use stylestore_core::ProductId;
use stylestore_integration_tests::{FlakyStore, valid_payment};
use stylestore_storefront::{AppError, Storefront};
use stylestore_storefront::catalog::Catalog;
use stylestore_storefront::config::StorefrontConfig;
use stylestore_storefront::persist::{FileStore, KeyValueStore, keys};
use stylestore_storefront::services::CartStore;

fn file_storefront(dir: &std::path::Path) -> Storefront {
    let kv = Rc::new(FileStore::open(dir).unwrap()) as Rc<dyn KeyValueStore>;
    Storefront::new(StorefrontConfig::default(), kv).unwrap()
}

#[test]
fn cart_round_trips_through_the_file_store_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();

    {
        let mut storefront = file_storefront(dir.path());
        // Insertion order 3, 1, 5 - deliberately not id order.
        storefront
            .cart_mut()
            .add_item(catalog.get(ProductId::new(3)).unwrap(), 1);
        storefront
            .cart_mut()
            .add_item(catalog.get(ProductId::new(1)).unwrap(), 4);
        storefront
            .cart_mut()
            .add_item(catalog.get(ProductId::new(5)).unwrap(), 2);
    }

    let reloaded = file_storefront(dir.path());
    let ids: Vec<i32> = reloaded
        .cart()
        .lines()
        .iter()
        .map(|l| l.product_id.as_i32())
        .collect();
    let quantities: Vec<u32> = reloaded.cart().lines().iter().map(|l| l.quantity).collect();

    assert_eq!(ids, vec![3, 1, 5]);
    assert_eq!(quantities, vec![1, 4, 2]);
    assert_eq!(reloaded.cart().item_count(), 7);
}

#[test]
fn orders_survive_a_reload_with_their_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();

    let order_id = {
        let mut storefront = file_storefront(dir.path());
        storefront
            .cart_mut()
            .add_item(catalog.get(ProductId::new(2)).unwrap(), 2);
        storefront.checkout(&valid_payment()).unwrap()
    };

    let reloaded = file_storefront(dir.path());
    let order = reloaded.cart().get_order(order_id).unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.payment.card_last4, "4242");
    assert!(reloaded.cart().is_empty());
}

#[test]
fn absent_keys_mean_empty_collections_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = file_storefront(dir.path());

    assert!(storefront.cart().is_empty());
    assert!(storefront.cart().orders().is_empty());
    assert!(!storefront.session().has_account());
}

#[test]
fn corrupt_stored_cart_surfaces_as_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let kv = FileStore::open(dir.path()).unwrap();
    kv.set(keys::CART, "{definitely not json").unwrap();

    let result = CartStore::load(Rc::new(kv) as Rc<dyn KeyValueStore>);
    assert!(result.is_err());
}

#[test]
fn failed_order_persist_leaves_cart_and_history_untouched() {
    // One good write covers the add; the order write fails.
    let kv = Rc::new(FlakyStore::failing_after(1)) as Rc<dyn KeyValueStore>;
    let mut storefront =
        Storefront::new(StorefrontConfig::default(), Rc::clone(&kv)).unwrap();
    let shirt = storefront
        .catalog()
        .get(ProductId::new(2))
        .unwrap()
        .clone();
    storefront.cart_mut().add_item(&shirt, 2);

    let err = storefront.checkout(&valid_payment()).unwrap_err();
    assert!(matches!(err, AppError::Persist(_)));
    assert_eq!(storefront.cart().item_count(), 2);
    assert!(storefront.cart().orders().is_empty());

    // Nothing half-written is visible to a reload either.
    let reloaded = CartStore::load(kv).unwrap();
    assert_eq!(reloaded.item_count(), 2);
    assert!(reloaded.orders().is_empty());
}
