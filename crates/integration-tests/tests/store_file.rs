//! On-disk document format and durability behavior.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use calabash_integration_tests::{customer, product_form, TestStore};
use calabash_store::{CartRepository, CatalogRepository, OrderRepository, StoreError};
use serde_json::Value;

#[test]
fn test_document_has_expected_top_level_keys() {
    let ctx = TestStore::new();
    let catalog = CatalogRepository::new(&ctx.store);
    let cart = CartRepository::new(&ctx.store);
    let orders = OrderRepository::new(&ctx.store);

    let soap = catalog.create(&product_form("Shea Butter Soap", "15.00")).unwrap();
    cart.add(soap.id).unwrap();
    orders.place(customer()).unwrap();

    let raw = fs::read(ctx.store.path()).unwrap();
    let doc: Value = serde_json::from_slice(&raw).unwrap();

    assert!(doc["products"].is_array());
    assert!(doc["cart"].is_array());
    assert!(doc["orders"].is_array());
    assert!(doc["darkMode"].is_boolean());

    // Stored field names keep their on-disk spellings.
    assert_eq!(doc["products"][0]["availability"], "In Stock");
    assert_eq!(doc["orders"][0]["customer"]["fullName"], "Ama Mensah");
    assert_eq!(doc["orders"][0]["status"], "pending");
}

#[test]
fn test_missing_file_reads_as_empty_store() {
    let ctx = TestStore::new();

    assert!(CatalogRepository::new(&ctx.store).list().unwrap().is_empty());
    assert!(!ctx.store.path().exists());
}

#[test]
fn test_corrupt_file_is_reported_not_wiped() {
    let ctx = TestStore::new();
    fs::write(ctx.store.path(), b"{ not json").unwrap();

    let err = CatalogRepository::new(&ctx.store).list().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));

    // The broken file is left in place for inspection.
    assert_eq!(fs::read(ctx.store.path()).unwrap(), b"{ not json");
}

#[test]
fn test_commit_leaves_no_temp_file_behind() {
    let ctx = TestStore::new();
    CatalogRepository::new(&ctx.store)
        .create(&product_form("Calabash Bowl", "30.00"))
        .unwrap();

    let dir = ctx.store.path().parent().unwrap();
    let names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["store.json".to_string()]);
}

#[test]
fn test_state_survives_reopen() {
    let ctx = TestStore::new();
    let catalog = CatalogRepository::new(&ctx.store);
    let soap = catalog.create(&product_form("Shea Butter Soap", "15.00")).unwrap();
    CartRepository::new(&ctx.store).add(soap.id).unwrap();

    let reopened = ctx.reopen();
    assert_eq!(CatalogRepository::new(&reopened).list().unwrap().len(), 1);
    assert_eq!(CartRepository::new(&reopened).badge_count().unwrap(), 1);
}
