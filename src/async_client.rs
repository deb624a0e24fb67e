//! Async wrapper around [`PriceTrackerSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs SDK operations on Tokio's blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! SDK holds no interior mutability, so independent fetches (products and
//! prices for a feed) run concurrently.
//!
//! # Example
//!
//! ```no_run
//! use price_tracker_sdk::AsyncPriceTrackerSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncPriceTrackerSdk::builder().build().await.unwrap();
//!
//!     let feed = sdk.home_feed().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let regions = sdk.run(|s| s.regions().list()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config;
use crate::error::{PriceTrackerError, Result};
use crate::models::{Price, Product, ProductId, ProductViewModel};
use crate::transport::Transport;
use crate::trends::{self, CatalogFilter};
use crate::PriceTrackerSdk;

// ---------------------------------------------------------------------------
// AsyncPriceTrackerSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPriceTrackerSdk`] instance.
pub struct AsyncPriceTrackerSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    session_dir: Option<PathBuf>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for AsyncPriceTrackerSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            session_dir: None,
            transport: None,
        }
    }
}

impl AsyncPriceTrackerSdkBuilder {
    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the session directory.
    pub fn session_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a custom transport instead of HTTP.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so the blocking HTTP
    /// client is never created on an async worker.
    pub async fn build(self) -> Result<AsyncPriceTrackerSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = PriceTrackerSdk::builder().timeout(self.timeout);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(dir) = self.session_dir {
                builder = builder.session_dir(dir);
            }
            if let Some(transport) = self.transport {
                builder.transport = Some(transport);
            }
            let sdk = builder.build()?;
            Ok(AsyncPriceTrackerSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncPriceTrackerSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PriceTrackerSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`].
#[derive(Clone)]
pub struct AsyncPriceTrackerSdk {
    inner: Arc<PriceTrackerSdk>,
}

impl AsyncPriceTrackerSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPriceTrackerSdkBuilder {
        AsyncPriceTrackerSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use price_tracker_sdk::AsyncPriceTrackerSdk;
    /// # async fn example() -> price_tracker_sdk::Result<()> {
    /// # let sdk = AsyncPriceTrackerSdk::builder().build().await?;
    /// let official = sdk.run(|s| s.prices().official()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PriceTrackerSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&*sdk))
            .await
            .map_err(join_error)?
    }

    /// Fetch products and prices concurrently.
    async fn products_and_prices(&self) -> Result<(Vec<Product>, Vec<Price>)> {
        let products = tokio::task::spawn_blocking({
            let sdk = Arc::clone(&self.inner);
            move || sdk.products().list()
        });
        let prices = tokio::task::spawn_blocking({
            let sdk = Arc::clone(&self.inner);
            move || sdk.prices().list()
        });
        let products = products.await.map_err(join_error)??;
        let prices = prices.await.map_err(join_error)??;
        Ok((products, prices))
    }

    /// Async [`PriceTrackerSdk::home_feed`].
    pub async fn home_feed(&self) -> Result<Vec<ProductViewModel>> {
        let (products, prices) = self.products_and_prices().await?;
        Ok(trends::build_view_models(
            &products,
            &prices,
            config::COMPACT_HISTORY_LIMIT,
        ))
    }

    /// Async [`PriceTrackerSdk::search_feed`].
    pub async fn search_feed(&self, filter: CatalogFilter) -> Result<Vec<ProductViewModel>> {
        Ok(filter.apply(self.home_feed().await?))
    }

    /// Async [`PriceTrackerSdk::product_detail`].
    pub async fn product_detail(&self, id: ProductId) -> Result<ProductViewModel> {
        self.run(move |s| s.product_detail(id)).await
    }

    /// Release the SDK on the blocking pool, where dropping the blocking HTTP
    /// client is allowed.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(join_error)
    }
}

fn join_error(e: tokio::task::JoinError) -> PriceTrackerError {
    PriceTrackerError::InvalidArgument(format!("Task join error: {e}"))
}
