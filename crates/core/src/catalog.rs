use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::{Product, ProductId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog `{origin}`: {source}")]
    Parse { origin: String, source: serde_json::Error },
}

/// Ordered product list. Order is significant: it is the tie-break basis
/// for single-product selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Every preference offered by any product, first-seen order, no repeats.
    pub fn available_preferences(&self) -> Vec<String> {
        collect_unique(self.products.iter().flat_map(|product| product.preferences.iter()))
    }

    /// Every feature offered by any product, first-seen order, no repeats.
    pub fn available_features(&self) -> Vec<String> {
        collect_unique(self.products.iter().flat_map(|product| product.features.iter()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw)
            .map_err(|source| CatalogError::Parse { origin: "<inline>".to_string(), source })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let catalog: Self = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            origin: path.display().to_string(),
            source,
        })?;

        tracing::debug!(
            event_name = "catalog.loaded",
            path = %path.display(),
            product_count = catalog.len(),
            "product catalog loaded"
        );
        Ok(catalog)
    }
}

impl From<Vec<Product>> for ProductCatalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

fn collect_unique<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    items.filter(|item| seen.insert(item.as_str())).cloned().collect()
}
