//! Cart Store
//!
//! Owns one cart and every mutation applied to it. All four operations go
//! through a single `RwLock` over the entry list: mutations hold the write
//! lock across their find-then-mutate sequence, and listing takes the read
//! lock and hands back a copy.

use super::{
    helpers::{apply_change, format_item_summary, merge_product, position_of},
    models::{CartEntry, QuantityChange},
};
use crate::{
    catalog::{models::ProductId, store::Catalog},
    error::DomainError,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

pub struct CartStore {
    scope: String,
    catalog: Arc<Catalog>,
    entries: RwLock<Vec<CartEntry>>,
}

impl CartStore {
    pub fn new(scope: impl Into<String>, catalog: Arc<Catalog>) -> Self {
        Self {
            scope: scope.into(),
            catalog,
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Snapshot of the cart in insertion order.
    pub fn list(&self) -> Vec<CartEntry> {
        self.read().clone()
    }

    /// Adds one unit of product `id`, merging into an existing entry.
    ///
    /// Fails with [`DomainError::ProductNotFound`] when the catalog does not
    /// know `id`; the cart is left untouched in that case.
    pub fn add(&self, id: ProductId) -> Result<Vec<CartEntry>, DomainError> {
        let product = self.catalog.lookup(id)?;

        let mut entries = self.write();
        let quantity = merge_product(&mut entries, product);
        debug!(
            cart = %self.scope,
            product_id = %id,
            quantity,
            contents = %format_item_summary(&entries),
            "product added to cart"
        );

        Ok(entries.clone())
    }

    /// Deletes the entry for `id` whatever its quantity and returns `id`.
    pub fn remove(&self, id: ProductId) -> Result<ProductId, DomainError> {
        let mut entries = self.write();
        let position = position_of(&entries, id).ok_or(DomainError::ItemNotFound(id))?;
        entries.remove(position);
        debug!(cart = %self.scope, product_id = %id, "item removed from cart");

        Ok(id)
    }

    /// Applies `change` to the entry for `id` and returns the entry afterwards.
    pub fn update_quantity(
        &self,
        id: ProductId,
        change: QuantityChange,
    ) -> Result<CartEntry, DomainError> {
        let mut entries = self.write();
        let position = position_of(&entries, id).ok_or(DomainError::ItemNotFound(id))?;

        let entry = &mut entries[position];
        apply_change(entry, change);
        debug!(
            cart = %self.scope,
            product_id = %id,
            ?change,
            quantity = entry.quantity,
            "item quantity updated"
        );

        Ok(entry.clone())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored: every mutation is a single field store or a Vec
    // push/remove, so no guard ever sees a half-written entry.
    fn read(&self) -> RwLockReadGuard<'_, Vec<CartEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CartEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;
    use std::thread;

    fn store() -> CartStore {
        let catalog = Catalog::new(vec![
            Product::new(1, "Widget", 10.0),
            Product::new(2, "Gadget", 24.5),
        ])
        .unwrap();
        CartStore::new("test", Arc::new(catalog))
    }

    #[test]
    fn unknown_product_fails_and_leaves_cart_unchanged() {
        let store = store();
        store.add(ProductId(1)).unwrap();

        assert_eq!(
            store.add(ProductId(99)),
            Err(DomainError::ProductNotFound(ProductId(99)))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].quantity, 1);
    }

    #[test]
    fn adding_twice_merges_into_one_entry() {
        let store = store();
        store.add(ProductId(1)).unwrap();
        let cart = store.add(ProductId(1)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id(), ProductId(1));
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let store = store();
        store.add(ProductId(2)).unwrap();
        store.add(ProductId(1)).unwrap();
        store.add(ProductId(2)).unwrap();

        let ids: Vec<_> = store.list().iter().map(CartEntry::id).collect();
        assert_eq!(ids, vec![ProductId(2), ProductId(1)]);
    }

    #[test]
    fn remove_is_strict_about_missing_items() {
        let store = store();
        store.add(ProductId(1)).unwrap();
        store.add(ProductId(2)).unwrap();

        assert_eq!(
            store.remove(ProductId(3)),
            Err(DomainError::ItemNotFound(ProductId(3)))
        );
        assert_eq!(store.len(), 2);

        assert_eq!(store.remove(ProductId(1)), Ok(ProductId(1)));
        let ids: Vec<_> = store.list().iter().map(CartEntry::id).collect();
        assert_eq!(ids, vec![ProductId(2)]);
    }

    #[test]
    fn remove_ignores_quantity() {
        let store = store();
        for _ in 0..5 {
            store.add(ProductId(1)).unwrap();
        }

        assert_eq!(store.remove(ProductId(1)), Ok(ProductId(1)));
        assert!(store.is_empty());
    }

    #[test]
    fn decrease_floors_at_zero_without_removing() {
        let store = store();
        store.add(ProductId(1)).unwrap();

        let entry = store.update_quantity(ProductId(1), QuantityChange::Down).unwrap();
        assert_eq!(entry.quantity, 0);
        let entry = store.update_quantity(ProductId(1), QuantityChange::Down).unwrap();
        assert_eq!(entry.quantity, 0);

        assert_eq!(store.len(), 1);
        let entry = store.update_quantity(ProductId(1), QuantityChange::Up).unwrap();
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn update_requires_an_existing_entry() {
        let store = store();
        assert_eq!(
            store.update_quantity(ProductId(1), QuantityChange::Up),
            Err(DomainError::ItemNotFound(ProductId(1)))
        );
        assert_eq!(
            store.update_quantity(ProductId(1), QuantityChange::Unchanged),
            Err(DomainError::ItemNotFound(ProductId(1)))
        );
    }

    #[test]
    fn cart_entries_do_not_affect_the_catalog() {
        let store = store();
        for _ in 0..3 {
            store.add(ProductId(1)).unwrap();
        }
        store.update_quantity(ProductId(1), QuantityChange::Down).unwrap();

        let product = store.catalog.lookup(ProductId(1)).unwrap();
        assert_eq!(product, &Product::new(1, "Widget", 10.0));
    }

    #[test]
    fn widget_scenario() {
        let catalog = Catalog::new(vec![Product::new(1, "Widget", 10.0)]).unwrap();
        let store = CartStore::new("scenario", Arc::new(catalog));

        let cart = store.add(ProductId(1)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 1);

        let cart = store.add(ProductId(1)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);

        let entry = store.update_quantity(ProductId(1), QuantityChange::Down).unwrap();
        assert_eq!(entry.quantity, 1);

        assert_eq!(store.remove(ProductId(1)), Ok(ProductId(1)));
        assert!(store.list().is_empty());

        assert_eq!(
            store.remove(ProductId(1)),
            Err(DomainError::ItemNotFound(ProductId(1)))
        );
    }

    #[test]
    fn concurrent_adds_of_a_new_product_never_lose_updates() {
        const WRITERS: usize = 32;
        let store = Arc::new(store());

        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.add(ProductId(2)).map(|_| ()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let cart = store.list();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, WRITERS as u32);
    }

    #[test]
    fn concurrent_increase_and_decrease_balance_out() {
        let store = Arc::new(store());
        for _ in 0..100 {
            store.add(ProductId(1)).unwrap();
        }

        let handles: Vec<_> = (0..50)
            .flat_map(|_| [QuantityChange::Up, QuantityChange::Down])
            .map(|change| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.update_quantity(ProductId(1), change).map(|_| ()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(store.list()[0].quantity, 100);
    }
}
