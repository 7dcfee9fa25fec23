//! Show catalog and order statistics.

use calabash_store::{total_quantity, CartRepository, CatalogRepository, OrderRepository};

use super::open_store;

/// Print store statistics via the log output.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();

    let stats = CatalogRepository::new(&store).stats()?;
    let cart_items = total_quantity(&CartRepository::new(&store).lines()?);
    let orders = OrderRepository::new(&store).list()?;

    tracing::info!("Store Statistics");
    tracing::info!("================");
    tracing::info!("Products: {} total", stats.total);
    tracing::info!("  In stock: {}", stats.in_stock);
    tracing::info!("  Out of stock: {}", stats.out_of_stock);
    tracing::info!("Cart items: {cart_items}");
    tracing::info!("Orders placed: {}", orders.len());

    Ok(())
}
