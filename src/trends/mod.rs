//! Price trend pipeline.
//!
//! Pure, synchronous transformations from raw products and prices to
//! render-ready view models:
//!
//! - [`aggregate`] picks the latest price per product and builds bounded,
//!   newest-first histories.
//! - [`variation`] computes the signed and percent change between two prices.
//! - [`icons`] maps a product category to its display symbol.
//! - [`view_model`] assembles the above into a [`ProductViewModel`](crate::models::ProductViewModel).
//! - [`catalog`] holds list-level helpers (filtering, categories, chart series).
//!
//! None of these functions fail. Missing or malformed data degrades to
//! zero/empty defaults.

pub mod aggregate;
pub mod catalog;
pub mod icons;
pub mod variation;
pub mod view_model;

pub use aggregate::{history_for_product, latest_price_per_product};
pub use catalog::{categories, chart_series, CatalogFilter};
pub use icons::{icon_for_category, FALLBACK_ICON};
pub use variation::variation;
pub use view_model::{build_view_model, build_view_models};
