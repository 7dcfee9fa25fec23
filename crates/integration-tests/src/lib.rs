//! Integration tests for Calabash Market.
//!
//! These tests exercise the full flow through the shared JSON store:
//! catalog management, cart mutations, checkout and the order log, the
//! way the storefront and admin binaries drive them. Each test gets its
//! own store file in a temp directory, so they run in parallel without
//! touching `data/store.json`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p calabash-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use calabash_core::Availability;
use calabash_store::records::ProductForm;
use calabash_store::JsonStore;
use tempfile::TempDir;

/// A store file in its own temp directory.
///
/// The directory is removed when the context is dropped.
pub struct TestStore {
    pub store: JsonStore,
    _dir: TempDir,
}

impl TestStore {
    /// Create an empty store in a fresh temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonStore::open(dir.path().join("store.json"));
        Self { store, _dir: dir }
    }

    /// Open a second handle on the same file, as another process would.
    #[must_use]
    pub fn reopen(&self) -> JsonStore {
        JsonStore::open(self._dir.path().join("store.json"))
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid product form with the given name and price.
#[must_use]
pub fn product_form(name: &str, price: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        category: "Food".to_string(),
        price: price.to_string(),
        currency: "GHS".to_string(),
        availability: Availability::InStock,
        image: String::new(),
    }
}

/// A complete set of delivery details.
#[must_use]
pub fn customer() -> calabash_store::Customer {
    calabash_store::Customer {
        full_name: "Ama Mensah".to_string(),
        phone: "0201234567".to_string(),
        address: "12 Ring Road".to_string(),
        city: "Accra".to_string(),
        region: "Greater Accra".to_string(),
    }
}
