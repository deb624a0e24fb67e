//! List-level helpers used by product list, search and chart views.

use std::collections::HashSet;

use crate::models::{Price, Product, ProductViewModel, RegionId};

// ---------------------------------------------------------------------------
// CatalogFilter
// ---------------------------------------------------------------------------

/// Search-screen filters. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Case-insensitive substring over name, category and description.
    pub query: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Region of the current price. Products without a price never match.
    pub region_id: Option<RegionId>,
}

impl CatalogFilter {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn region(mut self, region_id: RegionId) -> Self {
        self.region_id = Some(region_id);
        self
    }

    pub fn matches(&self, vm: &ProductViewModel) -> bool {
        if let Some(q) = &self.query {
            if !vm.product.matches(q) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &vm.product.category != category {
                return false;
            }
        }
        if let Some(region_id) = self.region_id {
            let in_region = vm
                .current_price
                .as_ref()
                .is_some_and(|p| p.region_id() == region_id);
            if !in_region {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, models: Vec<ProductViewModel>) -> Vec<ProductViewModel> {
        models.into_iter().filter(|vm| self.matches(vm)).collect()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Distinct product categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Chart values for the newest `points` entries of a newest-first history,
/// returned oldest first.
///
/// A single value is repeated so a line can still be drawn; an empty history
/// gives an empty series.
pub fn chart_series(history: &[Price], points: usize) -> Vec<f64> {
    let mut values: Vec<f64> = history.iter().take(points).map(|p| p.value).collect();
    values.reverse();
    if let [only] = values.as_slice() {
        values.push(*only);
    }
    values
}
