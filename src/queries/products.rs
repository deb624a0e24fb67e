//! Product queries against `/api/produits`.

use crate::client::ApiClient;
use crate::config::PRODUCTS_PATH;
use crate::error::Result;
use crate::models::{Product, ProductId, ProductInput};

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for the product catalog.
pub struct ProductQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List every product.
    pub fn list(&self) -> Result<Vec<Product>> {
        self.client.get(PRODUCTS_PATH)
    }

    /// Get a single product by id.
    pub fn get(&self, id: ProductId) -> Result<Product> {
        self.client.get(&format!("{PRODUCTS_PATH}/{id}"))
    }

    pub fn create(&self, product: &ProductInput) -> Result<Product> {
        self.client.post(PRODUCTS_PATH, product)
    }

    pub fn update(&self, id: ProductId, product: &ProductInput) -> Result<Product> {
        self.client.put(&format!("{PRODUCTS_PATH}/{id}"), product)
    }

    pub fn delete(&self, id: ProductId) -> Result<()> {
        self.client.delete(&format!("{PRODUCTS_PATH}/{id}"))
    }

    /// Products whose category contains `category` (case-insensitive).
    pub fn by_category(&self, category: &str) -> Result<Vec<Product>> {
        let needle = category.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.category.to_lowercase().contains(&needle))
            .collect())
    }

    /// Products whose name, category or description contains `query`
    /// (case-insensitive).
    pub fn search(&self, query: &str) -> Result<Vec<Product>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.matches(query))
            .collect())
    }
}
