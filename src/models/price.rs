use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{Product, Region};
use super::{ProductId, RegionId};

// ---------------------------------------------------------------------------
// Price — A single observed or official price point
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: i64,
    #[serde(rename = "produit", alias = "product")]
    pub product: Product,
    pub region: Region,
    #[serde(rename = "valeur", alias = "value")]
    pub value: f64,
    #[serde(
        rename = "dateMiseAJour",
        alias = "updatedAt",
        with = "super::timestamp"
    )]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "prixOfficiel", alias = "isOfficial", default)]
    pub is_official: bool,
}

impl Price {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn region_id(&self) -> RegionId {
        self.region.id
    }
}

/// Payload for creating or replacing a price (no id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceInput {
    #[serde(rename = "produit")]
    pub product: Product,
    pub region: Region,
    #[serde(rename = "valeur")]
    pub value: f64,
    #[serde(rename = "dateMiseAJour", with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub source: String,
    #[serde(rename = "prixOfficiel")]
    pub is_official: bool,
}

// ---------------------------------------------------------------------------
// PriceVariation — Change between two consecutive price values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stable,
}

impl Direction {
    /// Trend glyph shown next to a percentage.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↗",
            Direction::Down => "↘",
            Direction::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVariation {
    pub absolute_change: f64,
    pub percent_change: f64,
    pub direction: Direction,
}

impl PriceVariation {
    pub const ZERO: PriceVariation = PriceVariation {
        absolute_change: 0.0,
        percent_change: 0.0,
        direction: Direction::Stable,
    };
}

impl Default for PriceVariation {
    fn default() -> Self {
        Self::ZERO
    }
}

// ---------------------------------------------------------------------------
// ProductViewModel — Render-ready product with trend data
// ---------------------------------------------------------------------------

/// A product joined with its current price, bounded history and trend figures.
///
/// Only [`build_view_model`](crate::trends::build_view_model) constructs these,
/// so every screen sees identically computed figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductViewModel {
    #[serde(flatten)]
    pub product: Product,
    pub current_price: Option<Price>,
    pub price_history: Vec<Price>,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub direction: Direction,
    pub icon: &'static str,
}

impl ProductViewModel {
    pub fn current_value(&self) -> Option<f64> {
        self.current_price.as_ref().map(|p| p.value)
    }
}
