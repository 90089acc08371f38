//! Catalog Domain Models
//!
//! Product records and the canonical identifier shared by the catalog and
//! every cart.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{collections::HashMap, fmt, str::FromStr};
use thiserror::Error;

// =============================================================================
// Identifiers
// =============================================================================

/// Canonical integer identifier of a product.
///
/// Clients may send ids either as JSON numbers or as numeric strings; both
/// are normalized here, at deserialization time, so nothing past the request
/// boundary ever sees a textual id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid product id `{0}`")]
pub struct ParseProductIdError(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseProductIdError(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(Self(value)),
            RawId::Text(value) => value.parse().map_err(serde::de::Error::custom),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the store. Immutable once loaded into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    pub price: f64,

    /// Captures any descriptive fields (e.g., description, image) dynamically
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            extra: HashMap::new(),
        }
    }

    /// Attaches a descriptive field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
