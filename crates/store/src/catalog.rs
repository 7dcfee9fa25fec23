//! Product catalog repository.
//!
//! Owns the `products` collection. Created, edited and deleted by the
//! admin surface; read by the storefront and the cart.

use thiserror::Error;

use calabash_core::{Availability, ProductId};

use crate::kv::{JsonStore, StoreError};
use crate::records::{Product, ProductForm, next_millis_id};

/// Placeholder stored when a product is created without an image.
pub const DEFAULT_IMAGE: &str = "/static/default-product.svg";

/// Errors from catalog mutations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Required form fields were empty. The UI surfaces this as a
    /// blocking message; no state was changed.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Catalog stat counts, recomputed from the collection on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Repository for the product catalog.
pub struct CatalogRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.store.load()?.products)
    }

    /// Look up one product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self
            .store
            .load()?
            .products
            .into_iter()
            .find(|p| p.id == id))
    }

    /// Products whose name contains `term`, case-insensitively.
    ///
    /// An empty term matches everything, so the storefront can reuse this
    /// for the unfiltered grid.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn search(&self, term: &str) -> Result<Vec<Product>, StoreError> {
        let needle = term.trim().to_lowercase();
        let mut products = self.list()?;
        if !needle.is_empty() {
            products.retain(|p| p.name.to_lowercase().contains(&needle));
        }
        Ok(products)
    }

    /// Create a product from form input and append it to the catalog.
    ///
    /// Assigns a fresh monotonic id. An empty image stores the default
    /// placeholder; the stock counter starts at zero.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingFields` when name, price, currency
    /// or category is empty; nothing is written in that case.
    pub fn create(&self, form: &ProductForm) -> Result<Product, CatalogError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::MissingFields(missing));
        }

        let product = self.store.update(|data| {
            let id = next_millis_id(data.products.iter().map(|p| p.id.as_i64()).max());
            let image = if form.image.trim().is_empty() {
                DEFAULT_IMAGE.to_string()
            } else {
                form.image.clone()
            };
            let product = Product {
                id: ProductId::new(id),
                name: form.name.clone(),
                category: form.category.clone(),
                price: form.price.clone(),
                currency: form.currency.clone(),
                availability: form.availability,
                image,
                quantity: 0,
            };
            data.products.push(product.clone());
            product
        })?;

        tracing::info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Merge form input over an existing product.
    ///
    /// An unknown id is a no-op and returns `Ok(None)`. An empty image
    /// keeps the previous image; it is never cleared by an update.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingFields` when required fields are
    /// empty; nothing is written in that case.
    pub fn update(
        &self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<Option<Product>, CatalogError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::MissingFields(missing));
        }

        let updated = self.store.update(|data| {
            let product = data.products.iter_mut().find(|p| p.id == id)?;
            product.name = form.name.clone();
            product.category = form.category.clone();
            product.price = form.price.clone();
            product.currency = form.currency.clone();
            product.availability = form.availability;
            if !form.image.trim().is_empty() {
                product.image = form.image.clone();
            }
            Some(product.clone())
        })?;

        match &updated {
            Some(product) => tracing::info!(id = %product.id, "product updated"),
            None => tracing::debug!(id = %id, "update of unknown product ignored"),
        }
        Ok(updated)
    }

    /// Remove a product. Deleting an unknown id is a no-op.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let removed = self.store.update(|data| {
            let before = data.products.len();
            data.products.retain(|p| p.id != id);
            data.products.len() != before
        })?;

        if removed {
            tracing::info!(id = %id, "product deleted");
        }
        Ok(removed)
    }

    /// Total / in-stock / out-of-stock counts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn stats(&self) -> Result<CatalogStats, StoreError> {
        let products = self.list()?;
        let in_stock = products
            .iter()
            .filter(|p| p.availability == Availability::InStock)
            .count();
        Ok(CatalogStats {
            total: products.len(),
            in_stock,
            out_of_stock: products.len() - in_stock,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::open(dir.path().join("store.json"))
    }

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: "Cosmetics".to_string(),
            price: "19.99".to_string(),
            currency: "GHS".to_string(),
            availability: Availability::InStock,
            image: String::new(),
        }
    }

    #[test]
    fn test_create_appends_one_record_with_submitted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);

        let created = catalog.create(&form("Shea Butter")).unwrap();
        let listed = catalog.list().unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed.first(), Some(&created));
        assert_eq!(created.name, "Shea Butter");
        assert_eq!(created.price, "19.99");
        assert_eq!(created.image, DEFAULT_IMAGE);
        assert_eq!(created.quantity, 0);
    }

    #[test]
    fn test_create_assigns_unique_increasing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);

        let first = catalog.create(&form("One")).unwrap();
        let second = catalog.create(&form("Two")).unwrap();
        let third = catalog.create(&form("Three")).unwrap();

        assert!(first.id < second.id, "ids must increase");
        assert!(second.id < third.id, "ids must increase");
    }

    #[test]
    fn test_create_rejects_empty_required_fields_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);

        let mut bad = form("Shea Butter");
        bad.price = String::new();
        bad.category = "  ".to_string();

        let err = catalog.create(&bad).unwrap_err();
        match err {
            CatalogError::MissingFields(fields) => {
                assert_eq!(fields, vec!["price", "category"]);
            }
            CatalogError::Store(e) => panic!("unexpected store error: {e}"),
        }
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_merges_fields_and_keeps_image_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);

        let mut with_image = form("Shea Butter");
        with_image.image = "https://example.test/shea.jpg".to_string();
        let created = catalog.create(&with_image).unwrap();

        // Resubmit with identical fields and an empty image.
        let resubmit = ProductForm {
            image: String::new(),
            ..with_image.clone()
        };
        let updated = catalog.update(created.id, &resubmit).unwrap().unwrap();

        assert_eq!(updated.image, "https://example.test/shea.jpg");
        assert_eq!(updated, created);
    }

    #[test]
    fn test_update_replaces_image_when_supplied() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);
        let created = catalog.create(&form("Shea Butter")).unwrap();

        let mut edit = form("Shea Butter");
        edit.image = "data:image/png;base64,AAAA".to_string();
        let updated = catalog.update(created.id, &edit).unwrap().unwrap();

        assert_eq!(updated.image, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);
        catalog.create(&form("Shea Butter")).unwrap();

        let result = catalog.update(ProductId::new(1), &form("Ghost")).unwrap();
        assert!(result.is_none());

        let listed = catalog.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed.first().map(|p| p.name.as_str()), Some("Shea Butter"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);
        let created = catalog.create(&form("Shea Butter")).unwrap();

        assert!(catalog.delete(created.id).unwrap());
        assert!(!catalog.delete(created.id).unwrap());
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);
        catalog.create(&form("Shea Butter")).unwrap();
        catalog.create(&form("Black Soap")).unwrap();

        let hits = catalog.search("BUTTER").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|p| p.name.as_str()), Some("Shea Butter"));

        assert_eq!(catalog.search("  ").unwrap().len(), 2);
        assert!(catalog.search("nope").unwrap().is_empty());
    }

    #[test]
    fn test_stats_recomputed_from_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let catalog = CatalogRepository::new(&store);

        catalog.create(&form("One")).unwrap();
        let mut out = form("Two");
        out.availability = Availability::OutOfStock;
        catalog.create(&out).unwrap();

        let stats = catalog.stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.in_stock, 1);
        assert_eq!(stats.out_of_stock, 1);
    }
}
