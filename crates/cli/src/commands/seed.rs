//! Seed the store with sample products.

use calabash_core::Availability;
use calabash_store::records::ProductForm;
use calabash_store::CatalogRepository;

use super::open_store;

/// Sample products covering both availability states.
fn sample_products() -> Vec<ProductForm> {
    let entry = |name: &str, category: &str, price: &str, availability| ProductForm {
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        currency: "GHS".to_string(),
        availability,
        image: String::new(),
    };

    vec![
        entry("Shea Butter Soap", "Beauty", "15.00", Availability::InStock),
        entry("Kente Tote Bag", "Accessories", "85.50", Availability::InStock),
        entry("Roasted Cashews 500g", "Food", "42.00", Availability::InStock),
        entry("Calabash Bowl", "Home", "30.00", Availability::OutOfStock),
        entry("Hibiscus Tea Pack", "Food", "19.99", Availability::InStock),
    ]
}

/// Seed sample products into the catalog.
///
/// Refuses to touch a non-empty catalog unless `force` is set; `force`
/// replaces the catalog but leaves cart, orders and preferences alone.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let catalog = CatalogRepository::new(&store);

    let existing = catalog.list()?;
    if !existing.is_empty() {
        if !force {
            return Err(format!(
                "catalog already has {} products; pass --force to replace it",
                existing.len()
            )
            .into());
        }
        tracing::warn!(count = existing.len(), "Replacing existing catalog");
        store.update(|data| data.products.clear())?;
    }

    for form in sample_products() {
        let product = catalog.create(&form)?;
        tracing::info!(id = %product.id, name = %product.name, "Seeded product");
    }

    tracing::info!("Seeding complete");
    Ok(())
}
