//! Domain Errors
//!
//! Failures raised by the catalog and the cart store. Both are "not found"
//! class errors: they are definitional, never transient, and must reach the
//! request boundary unchanged.

use crate::catalog::models::ProductId;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog has no product with this id.
    #[error("No product with id: {0}")]
    ProductNotFound(ProductId),

    /// The cart has no entry with this id.
    #[error("No item with id: {0}")]
    ItemNotFound(ProductId),
}

impl DomainError {
    /// Stable machine-readable tag used by the transport layers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProductNotFound(_) => "product_not_found",
            Self::ItemNotFound(_) => "item_not_found",
        }
    }

    pub fn id(&self) -> ProductId {
        match self {
            Self::ProductNotFound(id) | Self::ItemNotFound(id) => *id,
        }
    }
}
