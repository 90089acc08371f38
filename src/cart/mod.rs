//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartEntry, QuantityChange, responses)
//! - Pure transition helpers (merge, quantity changes, scope resolution)
//! - The lock-guarded cart store and the per-scope registry
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartEntry, QuantityChange};
pub use state::{AppState, CartRegistry, SharedState};
pub use store::CartStore;
