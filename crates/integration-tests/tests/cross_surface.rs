//! Admin and storefront sharing one store file from separate handles.
//!
//! Each handle stands in for a separate process; nothing is cached, so
//! every read sees the latest committed document.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use calabash_integration_tests::{product_form, TestStore};
use calabash_store::{
    CartRepository, CatalogRepository, OrderSummary, PreferencesRepository, DEFAULT_IMAGE,
};
use rust_decimal::Decimal;

#[test]
fn test_admin_create_is_visible_to_storefront() {
    let ctx = TestStore::new();
    let storefront_handle = ctx.reopen();
    let admin_handle = ctx.store;

    let created = CatalogRepository::new(&admin_handle)
        .create(&product_form("Kente Tote Bag", "85.50"))
        .unwrap();
    assert_eq!(created.image, DEFAULT_IMAGE);

    let seen = CatalogRepository::new(&storefront_handle)
        .get(created.id)
        .unwrap()
        .unwrap();
    assert_eq!(seen, created);
}

#[test]
fn test_price_update_reaches_carted_item() {
    let ctx = TestStore::new();
    let admin_handle = ctx.reopen();
    let admin_catalog = CatalogRepository::new(&admin_handle);
    let catalog = CatalogRepository::new(&ctx.store);
    let cart = CartRepository::new(&ctx.store);

    let soap = catalog.create(&product_form("Shea Butter Soap", "15.00")).unwrap();
    cart.add(soap.id).unwrap();

    // Admin reprices after the item is in the cart.
    let repriced = product_form("Shea Butter Soap", "18.00");
    admin_catalog.update(soap.id, &repriced).unwrap().unwrap();

    // The summary charges the live catalog price, not the snapshot.
    let summary = OrderSummary::compute(&cart.lines().unwrap(), &catalog.list().unwrap());
    assert_eq!(summary.subtotal, Decimal::new(1800, 2));
}

#[test]
fn test_deleted_product_falls_back_to_snapshot_price() {
    let ctx = TestStore::new();
    let catalog = CatalogRepository::new(&ctx.store);
    let cart = CartRepository::new(&ctx.store);

    let soap = catalog.create(&product_form("Shea Butter Soap", "15.00")).unwrap();
    cart.add(soap.id).unwrap();
    assert!(catalog.delete(soap.id).unwrap());

    // The line stays in the cart priced from its snapshot.
    let lines = cart.lines().unwrap();
    assert_eq!(lines.len(), 1);
    let summary = OrderSummary::compute(&lines, &catalog.list().unwrap());
    assert_eq!(summary.subtotal, Decimal::new(1500, 2));
}

#[test]
fn test_dark_mode_is_shared_between_surfaces() {
    let ctx = TestStore::new();
    let admin_prefs = PreferencesRepository::new(&ctx.store);

    let storefront_handle = ctx.reopen();
    let storefront_prefs = PreferencesRepository::new(&storefront_handle);

    assert!(!storefront_prefs.dark_mode().unwrap());
    assert!(admin_prefs.toggle_dark_mode().unwrap());
    assert!(storefront_prefs.dark_mode().unwrap());
}

#[test]
fn test_concurrent_writers_are_last_write_wins() {
    let ctx = TestStore::new();
    let first_handle = ctx.reopen();
    let second_handle = ctx.reopen();

    // Both handles load the same empty document, then commit in turn.
    let mut first_doc = first_handle.load().unwrap();
    let mut second_doc = second_handle.load().unwrap();
    first_doc.dark_mode = true;
    second_doc.dark_mode = false;
    first_handle.commit(&first_doc).unwrap();
    second_handle.commit(&second_doc).unwrap();

    // The later commit wins wholesale; there is no merge.
    assert!(!ctx.store.load().unwrap().dark_mode);
}
