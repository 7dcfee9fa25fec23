//! Status enums for catalog and order entities.
//!
//! Serialized forms match the JSON the store keeps on disk, so the enum
//! variants rename to the exact stored strings.

use serde::{Deserialize, Serialize};

/// Product stock availability.
///
/// Stored as the display strings `"In Stock"` / `"Out of Stock"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[default]
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    /// Whether the product can be added to a cart.
    #[must_use]
    pub const fn is_in_stock(self) -> bool {
        matches!(self, Self::InStock)
    }

    /// The stored/displayed label for this availability.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(Self::InStock),
            "Out of Stock" => Ok(Self::OutOfStock),
            _ => Err(format!("invalid availability: {s}")),
        }
    }
}

/// Order lifecycle status.
///
/// Every order is created as `pending`; nothing in the system moves an
/// order past that today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
        }
    }
}
