//! Order log repository and the checkout contract.
//!
//! Orders are append-only: nothing in the system mutates or removes one
//! once written. Placing an order appends it and clears the cart in a
//! single store commit, so a crash can never leave the order written but
//! the cart intact.

use chrono::Utc;
use thiserror::Error;

use calabash_core::{OrderId, OrderStatus};

use crate::kv::{JsonStore, StoreError};
use crate::records::{Customer, Order, next_millis_id};

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Required delivery fields were empty; nothing was written.
    #[error("missing delivery information: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The cart was empty; nothing was written.
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Repository for the order log.
pub struct OrderRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All orders in the log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.store.load()?.orders)
    }

    /// Convert the current cart into an order.
    ///
    /// Validates the customer fields, snapshots the full cart into the
    /// order, appends it to the log and empties the cart - the append and
    /// the clear land in the same commit.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingFields` or
    /// `CheckoutError::EmptyCart` with no state change, or a `StoreError`
    /// if the store cannot be read or written.
    pub fn place(&self, customer: Customer) -> Result<Order, CheckoutError> {
        let missing = customer.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        let mut data = self.store.load().map_err(CheckoutError::Store)?;
        if data.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let id = next_millis_id(data.orders.iter().map(|o| o.id.as_i64()).max());
        let order = Order {
            id: OrderId::new(id),
            date: Utc::now(),
            items: std::mem::take(&mut data.cart),
            customer,
            status: OrderStatus::Pending,
        };
        data.orders.push(order.clone());
        self.store.commit(&data).map_err(CheckoutError::Store)?;

        tracing::info!(
            order_id = %order.id,
            items = order.items.len(),
            "order placed"
        );
        Ok(order)
    }
}
