//! Product Catalog Module
//!
//! Read-only reference data: product models, the catalog store and the REST
//! handlers that expose it.

pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use models::{Product, ProductId};
pub use store::{Catalog, CatalogError};
