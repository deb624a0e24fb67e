use serde::{Deserialize, Serialize};

use super::{ProductId, RegionId};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    #[serde(rename = "categorie", alias = "category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "unite", alias = "unit", default)]
    pub unit: String,
}

impl Product {
    /// Case-insensitive substring match over name, category and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Payload for creating or replacing a product (no id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "categorie")]
    pub category: String,
    pub description: String,
    #[serde(rename = "unite")]
    pub unit: String,
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionInput {
    #[serde(rename = "nom")]
    pub name: String,
}

// ---------------------------------------------------------------------------
// EntityRef — id-only reference used in submission payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: super::EntityId,
}

impl From<super::EntityId> for EntityRef {
    fn from(id: super::EntityId) -> Self {
        Self { id }
    }
}
