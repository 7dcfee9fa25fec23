//! Entity schemas for the store collections.
//!
//! Field names are the canonical ones; the JSON on disk keeps the
//! stored spellings where they differ (`fullName`, `darkMode`).
//! Prices stay decimal-as-string end to end: the summary computation
//! tolerates unparseable values instead of rejecting the record at
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use calabash_core::{Availability, OrderId, OrderStatus, ProductId};

/// A sellable product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Decimal amount as entered, e.g. `"19.99"`.
    pub price: String,
    /// Currency label attached to the price, e.g. `"GHS"`.
    pub currency: String,
    pub availability: Availability,
    /// URL or `data:` reference; never empty once stored.
    #[serde(default)]
    pub image: String,
    /// Stock counter; part of the stored schema but only ever written
    /// as zero.
    #[serde(default)]
    pub quantity: u32,
}

/// Form input for creating or updating a product.
///
/// `image` may be empty: on create a default placeholder is stored, on
/// update the previous image is kept.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub currency: String,
    pub availability: Availability,
    pub image: String,
}

impl ProductForm {
    /// Required fields that are empty or whitespace, in form order.
    ///
    /// Mirrors the admin form check: name, price, currency and category
    /// are required; image and availability are not.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.price.trim().is_empty() {
            missing.push("price");
        }
        if self.currency.trim().is_empty() {
            missing.push("currency");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        missing
    }
}

/// One product-quantity pairing pending purchase.
///
/// Name, price, currency and image are snapshots taken when the line was
/// added; they are never refreshed if the product is later edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line was created from. Not enforced against the
    /// catalog; the product may have been deleted since.
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub currency: String,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

/// Delivery details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub region: String,
}

impl Customer {
    /// Required fields that are empty or whitespace, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.region.trim().is_empty() {
            missing.push("region");
        }
        missing
    }
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub items: Vec<CartLine>,
    pub customer: Customer,
    pub status: OrderStatus,
}

/// Allocate a time-based id that is unique and monotonically increasing
/// with respect to the ids already in a collection.
///
/// Uses the millisecond clock, bumped past the current maximum when the
/// clock collides with or trails it
/// (rapid inserts within one millisecond, or a clock that went backwards).
pub(crate) fn next_millis_id(current_max: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match current_max {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: ProductId::new(1_700_000_000_000),
            name: "Shea Butter".to_string(),
            category: "Cosmetics".to_string(),
            price: "19.99".to_string(),
            currency: "GHS".to_string(),
            availability: Availability::InStock,
            image: "/static/default-product.svg".to_string(),
            quantity: 0,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1_700_000_000_000_i64);
        assert_eq!(json["availability"], "In Stock");
        assert_eq!(json["price"], "19.99");
    }

    #[test]
    fn test_customer_uses_full_name_storage_key() {
        let customer = Customer {
            full_name: "Ama Mensah".to_string(),
            phone: "0201234567".to_string(),
            address: "12 Ring Road".to_string(),
            city: "Accra".to_string(),
            region: "Greater Accra".to_string(),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["fullName"], "Ama Mensah");
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn test_product_form_missing_fields() {
        let form = ProductForm {
            name: "  ".to_string(),
            price: "5.00".to_string(),
            ..ProductForm::default()
        };
        assert_eq!(form.missing_fields(), vec!["name", "currency", "category"]);
    }

    #[test]
    fn test_customer_missing_fields_in_form_order() {
        let customer = Customer {
            full_name: String::new(),
            phone: "0201234567".to_string(),
            address: String::new(),
            city: "Accra".to_string(),
            region: String::new(),
        };
        assert_eq!(
            customer.missing_fields(),
            vec!["full name", "address", "region"]
        );
    }

    #[test]
    fn test_next_millis_id_bumps_past_existing_max() {
        let far_future = i64::MAX - 10;
        assert_eq!(next_millis_id(Some(far_future)), far_future + 1);
    }

    #[test]
    fn test_next_millis_id_uses_clock_when_ahead() {
        let id = next_millis_id(Some(1));
        assert!(id > 1_600_000_000_000, "expected a millisecond epoch id");
    }
}
