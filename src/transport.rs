//! Wire transport to the price-tracking backend.
//!
//! [`Transport`] is the seam between the SDK and the network. The SDK ships
//! [`HttpTransport`] (blocking `reqwest`); tests and embedders can inject any
//! other implementation through
//! [`PriceTrackerSdkBuilder::transport`](crate::PriceTrackerSdkBuilder::transport).

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config;
use crate::error::{PriceTrackerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A raw backend reply. Status handling is left to [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    /// Parsed JSON body, `Value::Null` when the body is empty.
    pub body: Value,
}

impl Response {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// Sends one request to the backend.
///
/// Implementations return `Err` only when no response was received at all;
/// any HTTP status, including errors, comes back as a [`Response`].
pub trait Transport: Send + Sync {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<Response> {
        (**self).send(method, path, body, bearer)
    }
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

/// Blocking HTTP transport against a fixed base URL.
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    /// A base URL with a path prefix (`http://host/backend`) keeps that prefix
    /// for every request.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let base_url = parse_url(&format!("{}/", base_url.as_ref().trim_end_matches('/')))?;
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/prix/3`.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| PriceTrackerError::InvalidArgument(format!("invalid path {path}: {e}")))
    }

    /// Whether the wider internet is reachable. Used to tell a dead connection
    /// from an unreachable backend.
    fn internet_reachable(&self) -> bool {
        match self
            .client
            .head(config::CONNECTIVITY_PROBE_URL)
            .timeout(config::CONNECTIVITY_PROBE_TIMEOUT)
            .send()
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!(error = %e, "connectivity probe failed");
                false
            }
        }
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<Response> {
        let url = self.url_for(path)?;
        let mut req = match method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
            Method::Put => self.client.put(url.clone()),
            Method::Delete => self.client.delete(url.clone()),
        };
        req = req.header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = match req.send() {
            Ok(resp) => resp,
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!(%method, %url, error = %e, "backend unreachable");
                if !self.internet_reachable() {
                    return Err(PriceTrackerError::Offline(
                        "no internet connection, check your network settings".into(),
                    ));
                }
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        let status = resp.status().as_u16();
        let bytes = resp.bytes()?;
        debug!(%method, %url, status, len = bytes.len(), "backend replied");
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        Ok(Response::new(status, body))
    }
}

// ---------------------------------------------------------------------------
// Path building
// ---------------------------------------------------------------------------

/// `path` with `segment` appended as one percent-encoded path segment, so a
/// product name such as `Riz brisé` or `a/b` cannot change the route.
pub fn path_with_segment(path: &str, segment: &str) -> Result<String> {
    let mut url = parse_url(config::DEFAULT_API_BASE_URL)?;
    url.set_path(path);
    url.path_segments_mut()
        .map_err(|()| PriceTrackerError::InvalidArgument(format!("cannot extend path {path}")))?
        .pop_if_empty()
        .push(segment);
    Ok(url.path().to_string())
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|e| PriceTrackerError::InvalidArgument(format!("invalid URL {raw}: {e}")))
}
