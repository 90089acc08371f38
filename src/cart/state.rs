//! Shopping Cart State Management
//!
//! This module manages the application state: the shared catalog and the
//! registry of cart stores, one per scope.

use super::{
    models::{CartEntry, QuantityChange},
    store::CartStore,
};
use crate::{
    catalog::{models::ProductId, store::Catalog},
    error::DomainError,
};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and every live cart
pub struct AppState {
    /// Immutable product catalog, loaded once at startup.
    pub catalog: Arc<Catalog>,

    /// Cart stores keyed by scope.
    pub carts: CartRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            carts: CartRegistry::new(Arc::clone(&catalog)),
            catalog,
        }
    }
}

// =============================================================================
// Cart Registry
// =============================================================================

/// Maps a scope key to its cart store.
///
/// DashMap only guards the map itself; each store carries its own lock, so
/// work on one cart never blocks another. A scope only comes into existence
/// when a product is successfully added to it: reads and failed mutations
/// against an unknown scope leave the map untouched.
pub struct CartRegistry {
    catalog: Arc<Catalog>,
    stores: DashMap<String, Arc<CartStore>>,
}

impl CartRegistry {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            stores: DashMap::new(),
        }
    }

    /// Cart store for `scope`, if anything has been added to it.
    pub fn get(&self, scope: &str) -> Option<Arc<CartStore>> {
        self.stores.get(scope).map(|store| Arc::clone(store.value()))
    }

    fn get_or_create(&self, scope: &str) -> Arc<CartStore> {
        if let Some(store) = self.get(scope) {
            return store;
        }

        let store = self
            .stores
            .entry(scope.to_string())
            .or_insert_with(|| {
                debug!(cart = scope, "creating cart");
                Arc::new(CartStore::new(scope, Arc::clone(&self.catalog)))
            });
        Arc::clone(store.value())
    }

    /// Snapshot of the cart for `scope`; an unknown scope is an empty cart.
    pub fn list(&self, scope: &str) -> Vec<CartEntry> {
        self.get(scope).map(|cart| cart.list()).unwrap_or_default()
    }

    /// Adds one unit of `id` to the cart for `scope`, creating the cart on
    /// first use. The product is resolved first so an unknown id never
    /// creates a scope.
    pub fn add(&self, scope: &str, id: ProductId) -> Result<Vec<CartEntry>, DomainError> {
        self.catalog.lookup(id)?;
        self.get_or_create(scope).add(id)
    }

    pub fn remove(&self, scope: &str, id: ProductId) -> Result<ProductId, DomainError> {
        self.get(scope)
            .ok_or(DomainError::ItemNotFound(id))?
            .remove(id)
    }

    pub fn update_quantity(
        &self,
        scope: &str,
        id: ProductId,
        change: QuantityChange,
    ) -> Result<CartEntry, DomainError> {
        self.get(scope)
            .ok_or(DomainError::ItemNotFound(id))?
            .update_quantity(id, change)
    }

    /// Number of scopes holding a cart.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
