//! Order summary computation.
//!
//! Derived view only: recomputed from the cart and catalog on every
//! render, never persisted. Prices resolve from the live catalog record
//! when the product still exists, falling back to the line's snapshot;
//! a price that fails to parse counts as zero and is logged, not
//! surfaced.

use rust_decimal::Decimal;

use calabash_core::parse_price;

use crate::records::{CartLine, Product};

/// Fixed tax rate applied to the subtotal (5%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Flat delivery fee added to every order (5.00).
#[must_use]
pub fn delivery_fee() -> Decimal {
    Decimal::new(500, 2)
}

/// Monetary breakdown of the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for `cart` against the current `products`.
    ///
    /// All four amounts are rounded to two decimal places; the total is
    /// taken over the rounded subtotal and tax so the displayed figures
    /// always add up.
    #[must_use]
    pub fn compute(cart: &[CartLine], products: &[Product]) -> Self {
        let mut subtotal = Decimal::ZERO;
        for line in cart {
            let raw = products
                .iter()
                .find(|p| p.id == line.id)
                .map_or(line.price.as_str(), |p| p.price.as_str());
            let price = parse_price(raw).unwrap_or_else(|| {
                tracing::warn!(line_id = %line.id, price = raw, "unparseable price treated as zero");
                Decimal::ZERO
            });
            subtotal += price * Decimal::from(line.quantity);
        }

        let subtotal = subtotal.round_dp(2);
        let tax = (subtotal * tax_rate()).round_dp(2);
        let delivery_fee = delivery_fee();
        let total = (subtotal + tax + delivery_fee).round_dp(2);

        Self {
            subtotal,
            tax,
            delivery_fee,
            total,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use calabash_core::{Availability, ProductId};

    use super::*;

    fn line(id: i64, price: &str, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: price.to_string(),
            currency: "GHS".to_string(),
            quantity,
            image: String::new(),
        }
    }

    fn product(id: i64, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: "Cosmetics".to_string(),
            price: price.to_string(),
            currency: "GHS".to_string(),
            availability: Availability::InStock,
            image: String::new(),
            quantity: 0,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_cart_still_charges_delivery() {
        let summary = OrderSummary::compute(&[], &[]);
        assert_eq!(summary.subtotal, dec("0.00"));
        assert_eq!(summary.tax, dec("0.00"));
        assert_eq!(summary.delivery_fee, dec("5.00"));
        assert_eq!(summary.total, dec("5.00"));
    }

    #[test]
    fn test_subtotal_19_99() {
        let cart = vec![line(1, "19.99", 1)];
        let summary = OrderSummary::compute(&cart, &[product(1, "19.99")]);
        assert_eq!(summary.subtotal, dec("19.99"));
        assert_eq!(summary.tax, dec("1.00"));
        assert_eq!(summary.total, dec("25.99"));
    }

    #[test]
    fn test_subtotal_100() {
        let cart = vec![line(1, "25.00", 4)];
        let summary = OrderSummary::compute(&cart, &[product(1, "25.00")]);
        assert_eq!(summary.subtotal, dec("100.00"));
        assert_eq!(summary.tax, dec("5.00"));
        assert_eq!(summary.total, dec("110.00"));
    }

    #[test]
    fn test_live_catalog_price_wins_over_snapshot() {
        // Product was edited after the line was added; summary follows
        // the live price while the snapshot stays locked in the line.
        let cart = vec![line(1, "10.00", 2)];
        let summary = OrderSummary::compute(&cart, &[product(1, "15.00")]);
        assert_eq!(summary.subtotal, dec("30.00"));
    }

    #[test]
    fn test_snapshot_price_used_when_product_deleted() {
        let cart = vec![line(1, "10.00", 2)];
        let summary = OrderSummary::compute(&cart, &[]);
        assert_eq!(summary.subtotal, dec("20.00"));
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let cart = vec![line(1, "free", 3), line(2, "2.50", 2)];
        let summary = OrderSummary::compute(&cart, &[]);
        assert_eq!(summary.subtotal, dec("5.00"));
        assert_eq!(summary.tax, dec("0.25"));
        assert_eq!(summary.total, dec("10.25"));
    }

    #[test]
    fn test_quantities_multiply_prices() {
        let cart = vec![line(1, "1.25", 3), line(2, "0.75", 2)];
        let summary = OrderSummary::compute(&cart, &[]);
        assert_eq!(summary.subtotal, dec("5.25"));
    }
}
