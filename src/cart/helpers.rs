//! Shopping Cart Business Logic Helpers
//!
//! Pure transition functions over a cart's entry list. They carry no locking
//! of their own; [`CartStore`](super::store::CartStore) runs them under its
//! write lock.

use super::models::{CartEntry, QuantityChange};
use crate::catalog::models::{Product, ProductId};

/// Scope used when a request does not name a cart.
pub const DEFAULT_CART_SCOPE: &str = "default";

/// Returns the provided scope, or the process-wide default when `None` or blank.
pub fn resolve_cart_scope(cart_id: Option<&str>) -> String {
    match cart_id.map(str::trim) {
        Some(scope) if !scope.is_empty() => scope.to_string(),
        _ => DEFAULT_CART_SCOPE.to_string(),
    }
}

/// Position of the entry for `id`, if the cart holds one.
pub fn position_of(entries: &[CartEntry], id: ProductId) -> Option<usize> {
    entries.iter().position(|entry| entry.id() == id)
}

/// Merges one unit of `product` into `entries`.
///
/// # Behaviour
///
/// * If an entry with the same id already exists, its `quantity` grows by one.
/// * Otherwise a fresh copy of the product is appended with quantity 1, so
///   insertion order is preserved and the catalog record is never aliased.
///
/// Returns the resulting quantity.
pub fn merge_product(entries: &mut Vec<CartEntry>, product: &Product) -> u32 {
    if let Some(existing) = entries.iter_mut().find(|entry| entry.id() == product.id) {
        existing.quantity = existing.quantity.saturating_add(1);
        existing.quantity
    } else {
        entries.push(CartEntry::from_product(product));
        1
    }
}

/// Applies a quantity change in place. Decrease floors at zero and never
/// removes the entry.
pub fn apply_change(entry: &mut CartEntry, change: QuantityChange) {
    match change {
        QuantityChange::Up => entry.quantity = entry.quantity.saturating_add(1),
        QuantityChange::Down => entry.quantity = entry.quantity.saturating_sub(1),
        QuantityChange::Unchanged => {}
    }
}

/// Produces a human-readable one-line summary for a list of cart entries.
///
/// Example output: `"2x Widget, 1x Gadget"`.
pub fn format_item_summary(entries: &[CartEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}x {}", entry.quantity, entry.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
