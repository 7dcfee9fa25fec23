//! List the order log.

use calabash_store::{total_quantity, OrderRepository};

use super::open_store;

/// Print each placed order, oldest first.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let orders = OrderRepository::new(&store).list()?;

    if orders.is_empty() {
        tracing::info!("No orders placed yet");
        return Ok(());
    }

    tracing::info!("Orders ({})", orders.len());
    for order in &orders {
        tracing::info!(
            id = %order.id,
            date = %order.date.format("%Y-%m-%d %H:%M:%S"),
            customer = %order.customer.full_name,
            city = %order.customer.city,
            items = total_quantity(&order.items),
            status = %order.status,
            "order"
        );
    }

    Ok(())
}
