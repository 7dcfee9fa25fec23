//! Cart repository.
//!
//! Owns the `cart` collection. Lines snapshot the product at add time;
//! a quantity driven to zero removes the line rather than keeping it.

use calabash_core::ProductId;

use crate::kv::{JsonStore, StoreError};
use crate::records::CartLine;

/// Direction of a quantity adjustment from the +/- controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Increase,
    Decrease,
}

/// Sum of quantities across all lines - the cart badge count.
#[must_use]
pub fn total_quantity(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Repository for the shopping cart.
pub struct CartRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All cart lines in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn lines(&self) -> Result<Vec<CartLine>, StoreError> {
        Ok(self.store.load()?.cart)
    }

    /// The cart badge count (sum of quantities).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn badge_count(&self) -> Result<u32, StoreError> {
        Ok(total_quantity(&self.lines()?))
    }

    /// Add one unit of a product to the cart.
    ///
    /// Unknown products are a no-op and return `false`. A product already
    /// in the cart gets its quantity bumped; otherwise a new line is
    /// appended at quantity 1, snapshotting name, price, currency and
    /// image from the live catalog record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn add(&self, product_id: ProductId) -> Result<bool, StoreError> {
        let added = self.store.update(|data| {
            let Some(product) = data.products.iter().find(|p| p.id == product_id) else {
                return false;
            };
            match data.cart.iter_mut().find(|line| line.id == product_id) {
                Some(line) => line.quantity += 1,
                None => data.cart.push(CartLine {
                    id: product.id,
                    name: product.name.clone(),
                    price: product.price.clone(),
                    currency: product.currency.clone(),
                    quantity: 1,
                    image: product.image.clone(),
                }),
            }
            true
        })?;

        if added {
            tracing::debug!(product_id = %product_id, "added to cart");
        } else {
            tracing::debug!(product_id = %product_id, "add to cart ignored, product unknown");
        }
        Ok(added)
    }

    /// Adjust a line's quantity by one in either direction.
    ///
    /// Decreasing to zero or below removes the line entirely. An unknown
    /// line id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn change_quantity(
        &self,
        id: ProductId,
        change: QuantityChange,
    ) -> Result<(), StoreError> {
        self.store.update(|data| {
            let Some(index) = data.cart.iter().position(|line| line.id == id) else {
                return;
            };
            let Some(line) = data.cart.get_mut(index) else {
                return;
            };
            match change {
                QuantityChange::Increase => line.quantity += 1,
                QuantityChange::Decrease => {
                    if line.quantity <= 1 {
                        data.cart.remove(index);
                    } else {
                        line.quantity -= 1;
                    }
                }
            }
        })
    }

    /// Remove a line unconditionally. An unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn remove(&self, id: ProductId) -> Result<(), StoreError> {
        self.store.update(|data| {
            data.cart.retain(|line| line.id != id);
        })
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.update(|data| data.cart.clear())
    }
}
