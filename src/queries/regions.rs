//! Region queries against `/api/regions`.

use crate::client::ApiClient;
use crate::config::REGIONS_PATH;
use crate::error::Result;
use crate::models::{Region, RegionId, RegionInput};

/// Query interface for regions.
pub struct RegionQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> RegionQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Region>> {
        self.client.get(REGIONS_PATH)
    }

    pub fn get(&self, id: RegionId) -> Result<Region> {
        self.client.get(&format!("{REGIONS_PATH}/{id}"))
    }

    pub fn create(&self, region: &RegionInput) -> Result<Region> {
        self.client.post(REGIONS_PATH, region)
    }

    pub fn update(&self, id: RegionId, region: &RegionInput) -> Result<Region> {
        self.client.put(&format!("{REGIONS_PATH}/{id}"), region)
    }

    pub fn delete(&self, id: RegionId) -> Result<()> {
        self.client.delete(&format!("{REGIONS_PATH}/{id}"))
    }

    /// Regions whose name contains `query` (case-insensitive).
    pub fn search(&self, query: &str) -> Result<Vec<Region>> {
        let needle = query.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect())
    }
}
