//! Price queries against `/api/prix`.
//!
//! The backend only lists prices wholesale, so per-product and per-region
//! views filter the full list, and history/latest selection go through
//! [`trends::aggregate`](crate::trends::aggregate).

use crate::client::ApiClient;
use crate::config::{self, PRICES_PATH};
use crate::error::Result;
use crate::models::{Price, PriceInput, ProductId, RegionId};
use crate::transport::path_with_segment;
use crate::trends::{history_for_product, latest_price_per_product};

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for product prices.
pub struct PriceQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List every price record.
    pub fn list(&self) -> Result<Vec<Price>> {
        self.client.get(PRICES_PATH)
    }

    pub fn get(&self, id: i64) -> Result<Price> {
        self.client.get(&format!("{PRICES_PATH}/{id}"))
    }

    /// Prices for a product looked up by name on the server.
    pub fn by_product_name(&self, name: &str) -> Result<Vec<Price>> {
        let path = path_with_segment(&format!("{PRICES_PATH}/produit"), name)?;
        self.client.get(&path)
    }

    pub fn create(&self, price: &PriceInput) -> Result<Price> {
        self.client.post(PRICES_PATH, price)
    }

    pub fn update(&self, id: i64, price: &PriceInput) -> Result<Price> {
        self.client.put(&format!("{PRICES_PATH}/{id}"), price)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("{PRICES_PATH}/{id}"))
    }

    pub fn by_product(&self, product_id: ProductId) -> Result<Vec<Price>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.product_id() == product_id)
            .collect())
    }

    pub fn by_region(&self, region_id: RegionId) -> Result<Vec<Price>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.region_id() == region_id)
            .collect())
    }

    /// Only official (government-published) prices.
    pub fn official(&self) -> Result<Vec<Price>> {
        Ok(self.list()?.into_iter().filter(|p| p.is_official).collect())
    }

    /// Newest-first history for a product, at most `limit` entries.
    ///
    /// Pass [`config::DEFAULT_HISTORY_LIMIT`] for the detail view.
    pub fn history(&self, product_id: ProductId, limit: usize) -> Result<Vec<Price>> {
        let prices = self.list()?;
        Ok(history_for_product(&prices, product_id, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    /// [`history`](Self::history) with the default detail-view length.
    pub fn default_history(&self, product_id: ProductId) -> Result<Vec<Price>> {
        self.history(product_id, config::DEFAULT_HISTORY_LIMIT)
    }

    /// The latest price of every product that has one, ordered by product id.
    pub fn latest_for_all_products(&self) -> Result<Vec<Price>> {
        let prices = self.list()?;
        Ok(latest_price_per_product(&prices)
            .into_values()
            .cloned()
            .collect())
    }
}
