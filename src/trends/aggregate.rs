//! Latest-price selection and bounded price histories.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::models::{Price, ProductId};

/// Select the most recent price for every product present in `prices`.
///
/// When two prices of the same product share the latest `updated_at`, the one
/// that appears first in `prices` is kept. Products with no price are absent
/// from the result. The map iterates in ascending product id order.
pub fn latest_price_per_product(prices: &[Price]) -> BTreeMap<ProductId, &Price> {
    let mut latest: BTreeMap<ProductId, &Price> = BTreeMap::new();
    for price in prices {
        match latest.entry(price.product_id()) {
            Entry::Vacant(slot) => {
                slot.insert(price);
            }
            Entry::Occupied(mut slot) => {
                if price.updated_at > slot.get().updated_at {
                    slot.insert(price);
                }
            }
        }
    }
    latest
}

/// Prices of one product, newest first, truncated to `limit` entries.
///
/// The sort is stable: prices with identical timestamps keep their input order.
/// A `limit` of zero is treated as one.
pub fn history_for_product(prices: &[Price], product_id: ProductId, limit: usize) -> Vec<&Price> {
    let mut history: Vec<&Price> = prices
        .iter()
        .filter(|p| p.product_id() == product_id)
        .collect();
    history.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    history.truncate(limit.max(1));
    history
}
