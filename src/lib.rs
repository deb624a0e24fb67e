//! Price tracker SDK for Rust.
//!
//! Provides a high-level client for the price-tracking backend: browse
//! products and prices, build price-history trends, file price-discrepancy
//! reports and keep a signed-in session on disk.
//!
//! The trend pipeline in [`trends`] is pure and can be used on its own with
//! already-fetched data.
//!
//! # Quick start
//!
//! ```no_run
//! use price_tracker_sdk::PriceTrackerSdk;
//!
//! let sdk = PriceTrackerSdk::builder()
//!     .base_url("http://localhost:8080")
//!     .build()
//!     .unwrap();
//!
//! // Product list with 7-point trends
//! for row in sdk.home_feed().unwrap() {
//!     println!("{} {} {:+.1}%", row.icon, row.product.name, row.price_change_percent);
//! }
//!
//! // Standalone variation
//! let v = price_tracker_sdk::trends::variation(150.0, 100.0);
//! assert_eq!(v.percent_change, 50.0);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod session;
pub mod transport;
pub mod trends;

#[cfg(test)]
mod test_support;

#[cfg(feature = "async")]
pub use async_client::AsyncPriceTrackerSdk;
pub use client::{ApiClient, Submission};
pub use error::{PriceTrackerError, Result};
pub use session::{Language, SessionStore};
pub use transport::{HttpTransport, Method, Response, Transport};
pub use trends::CatalogFilter;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use models::{Product, ProductId, ProductViewModel};

// ---------------------------------------------------------------------------
// PriceTrackerSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PriceTrackerSdk`] instance.
///
/// Use [`PriceTrackerSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PriceTrackerSdkBuilder::build) to create the SDK.
pub struct PriceTrackerSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    session_dir: Option<PathBuf>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for PriceTrackerSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            session_dir: None,
            transport: None,
        }
    }
}

impl PriceTrackerSdkBuilder {
    /// Set the backend base URL.
    ///
    /// If not set, `PRICE_TRACKER_API_URL` is read from the environment, then
    /// [`config::DEFAULT_API_BASE_URL`] is used.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the directory holding the auth token and preferences.
    ///
    /// Defaults to a `price-tracker-sdk` directory under the platform's local
    /// data directory.
    pub fn session_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a custom transport instead of HTTP. `base_url` and `timeout` are
    /// then ignored.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the SDK, opening the session store and the transport.
    ///
    /// No request is sent until a query runs.
    pub fn build(self) -> Result<PriceTrackerSdk> {
        let session = SessionStore::new(self.session_dir)?;
        let transport: Box<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let base_url = config::resolve_base_url(self.base_url);
                debug!(%base_url, "using HTTP transport");
                Box::new(HttpTransport::new(base_url, self.timeout)?)
            }
        };
        Ok(PriceTrackerSdk {
            client: ApiClient::new(transport, session),
        })
    }
}

// ---------------------------------------------------------------------------
// PriceTrackerSdk
// ---------------------------------------------------------------------------

/// The main entry point for the price tracker SDK.
///
/// Wraps an [`ApiClient`] (which owns the [`Transport`] and [`SessionStore`])
/// and exposes domain-specific query interfaces as lightweight borrowing
/// wrappers, plus screen-level feeds that run the [`trends`] pipeline.
///
/// Created via [`PriceTrackerSdk::builder()`].
pub struct PriceTrackerSdk {
    client: ApiClient,
}

impl PriceTrackerSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PriceTrackerSdkBuilder {
        PriceTrackerSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the product query interface.
    pub fn products(&self) -> queries::ProductQuery<'_> {
        queries::ProductQuery::new(&self.client)
    }

    /// Access the price query interface.
    pub fn prices(&self) -> queries::PriceQuery<'_> {
        queries::PriceQuery::new(&self.client)
    }

    /// Access the region query interface.
    pub fn regions(&self) -> queries::RegionQuery<'_> {
        queries::RegionQuery::new(&self.client)
    }

    /// Access the price report query interface.
    pub fn reports(&self) -> queries::ReportQuery<'_> {
        queries::ReportQuery::new(&self.client)
    }

    /// Access login, registration and the cached profile.
    pub fn auth(&self) -> queries::AuthQuery<'_> {
        queries::AuthQuery::new(&self.client)
    }

    /// The on-disk session (token, profile, language, onboarding flag).
    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    // -- Screen feeds ------------------------------------------------------

    /// Every product with its latest price and a compact 7-point trend,
    /// sorted by name.
    pub fn home_feed(&self) -> Result<Vec<ProductViewModel>> {
        let products = self.products().list()?;
        let prices = self.prices().list()?;
        Ok(trends::build_view_models(
            &products,
            &prices,
            config::COMPACT_HISTORY_LIMIT,
        ))
    }

    /// One product with a full 30-point history.
    pub fn product_detail(&self, id: ProductId) -> Result<ProductViewModel> {
        let product = self.products().get(id)?;
        let prices = self.prices().by_product(id)?;
        Ok(trends::build_view_model(
            &product,
            &prices,
            config::DEFAULT_HISTORY_LIMIT,
        ))
    }

    /// [`home_feed`](Self::home_feed) narrowed by a search filter.
    pub fn search_feed(&self, filter: &CatalogFilter) -> Result<Vec<ProductViewModel>> {
        Ok(filter.apply(self.home_feed()?))
    }

    /// Distinct product categories, in catalog order.
    pub fn categories(&self) -> Result<Vec<String>> {
        let products: Vec<Product> = self.products().list()?;
        Ok(trends::categories(&products))
    }

    /// Consume the SDK and release the HTTP client.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PriceTrackerSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.client.session();
        write!(
            f,
            "PriceTrackerSdk(session_dir={}, authenticated={}, language={})",
            session.dir().display(),
            session.token().is_some(),
            session.language().code()
        )
    }
}
