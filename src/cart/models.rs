//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::models::{Product, ProductId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Represents a line in the shopping cart: an independent copy of a catalog
/// product plus the quantity held.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartEntry {
    /// Snapshot of the product taken on first add
    #[serde(flatten)]
    pub product: Product,

    /// Quantity of this item, never negative
    pub quantity: u32,
}

impl CartEntry {
    /// Creates a fresh entry holding one unit of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Direction of a quantity update.
///
/// Unrecognized tokens map to [`QuantityChange::Unchanged`] rather than
/// failing, so a client sending an unknown direction gets the entry back
/// untouched. The same holds for a change that is not a string at all, or
/// is missing from the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum QuantityChange {
    Up,
    Down,
    #[default]
    Unchanged,
}

impl QuantityChange {
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "up" | "increase" => Self::Up,
            "down" | "decrease" => Self::Down,
            _ => Self::Unchanged,
        }
    }
}

impl From<Value> for QuantityChange {
    fn from(value: Value) -> Self {
        value.as_str().map(Self::parse).unwrap_or_default()
    }
}

/// Body of the REST quantity update
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    #[serde(default)]
    pub change: QuantityChange,
}

/// Response for cart removals
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    /// Identifier of the entry that was removed
    pub id: ProductId,
}
