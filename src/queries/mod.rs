//! Query modules for the price-tracking backend.
//!
//! Each module provides a query struct that borrows an [`ApiClient`](crate::client::ApiClient)
//! and exposes typed methods returning `Result<T>`. Filtering the backend does
//! not offer server-side is done client-side over the full collection.

pub mod auth;
pub mod prices;
pub mod products;
pub mod regions;
pub mod reports;

pub use auth::AuthQuery;
pub use prices::PriceQuery;
pub use products::ProductQuery;
pub use regions::RegionQuery;
pub use reports::ReportQuery;
