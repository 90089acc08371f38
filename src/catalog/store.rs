//! Product Catalog
//!
//! The catalog is built once at startup and never mutated afterwards, so it
//! is shared behind an `Arc` and read without any synchronization.

use super::models::{Product, ProductId};
use crate::error::DomainError;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse catalog file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// Ordered, read-only set of products with an id index.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products, index })
    }

    /// Reads a JSON array of products from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(products)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn lookup(&self, id: ProductId) -> Result<&Product, DomainError> {
        self.index
            .get(&id)
            .map(|&position| &self.products[position])
            .ok_or(DomainError::ProductNotFound(id))
    }

    /// All products in load order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let products = default_products();
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();

        Self { products, index }
    }
}

fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "Widget", 10.0).with_field("description", "A general purpose widget"),
        Product::new(2, "Gadget", 24.5).with_field("description", "A pocket-sized gadget"),
        Product::new(3, "Sprocket", 4.75).with_field("description", "Twelve-tooth steel sprocket"),
        Product::new(4, "Gizmo", 99.99).with_field("description", "Deluxe gizmo with case"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookup_finds_products_and_reports_missing_ids() {
        let catalog = Catalog::new(vec![Product::new(1, "Widget", 10.0)]).unwrap();

        assert_eq!(catalog.lookup(ProductId(1)).unwrap().name, "Widget");
        assert_eq!(
            catalog.lookup(ProductId(9)),
            Err(DomainError::ProductNotFound(ProductId(9)))
        );
    }

    #[test]
    fn list_preserves_load_order_and_is_restartable() {
        let catalog = Catalog::new(vec![
            Product::new(5, "E", 1.0),
            Product::new(2, "B", 1.0),
            Product::new(9, "I", 1.0),
        ])
        .unwrap();

        let first: Vec<_> = catalog.list().iter().map(|p| p.id.0).collect();
        let second: Vec<_> = catalog.list().iter().map(|p| p.id.0).collect();
        assert_eq!(first, vec![5, 2, 9]);
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![Product::new(1, "A", 1.0), Product::new(1, "B", 2.0)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(ProductId(1)))));
    }

    #[test]
    fn default_catalog_has_unique_ids() {
        let catalog = Catalog::default();
        assert!(!catalog.is_empty());
        assert!(Catalog::new(catalog.list().to_vec()).is_ok());
    }

    #[test]
    fn loads_products_from_json_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Widget", "price": 10}}, {{"id": "2", "name": "Gadget", "price": 3.5, "color": "red"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 2);
        let gadget = catalog.lookup(ProductId(2)).unwrap();
        assert_eq!(gadget.extra["color"], "red");
    }

    #[test]
    fn unreadable_and_malformed_files_are_reported() {
        let missing = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        assert!(matches!(
            Catalog::from_json_file(&missing),
            Err(CatalogError::Read { .. })
        ));

        let path = std::env::temp_dir().join(format!("bad-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{ not json").unwrap();
        let result = Catalog::from_json_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }
}
