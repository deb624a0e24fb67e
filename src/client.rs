//! Authenticated JSON client over a [`Transport`].
//!
//! Adds the bearer token from the [`SessionStore`] to every request, decodes
//! JSON bodies into typed values, and maps HTTP status codes onto
//! [`PriceTrackerError`]. A 401 reply clears the stored session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config;
use crate::error::{PriceTrackerError, Result};
use crate::models::{LoginRequest, NewReport, RegisterRequest};
use crate::session::SessionStore;
use crate::transport::{Method, Transport};

// ---------------------------------------------------------------------------
// Submission — one variant per write operation with a fixed endpoint
// ---------------------------------------------------------------------------

/// A typed write request. Each variant knows its endpoint, so a payload can
/// only ever be posted where it belongs.
#[derive(Debug, Clone)]
pub enum Submission {
    Login(LoginRequest),
    Register(RegisterRequest),
    Report(NewReport),
}

impl Submission {
    pub fn path(&self) -> &'static str {
        match self {
            Submission::Login(_) => config::LOGIN_PATH,
            Submission::Register(_) => config::REGISTER_PATH,
            Submission::Report(_) => config::REPORTS_PATH,
        }
    }

    pub fn body(&self) -> Result<Value> {
        let body = match self {
            Submission::Login(req) => serde_json::to_value(req)?,
            Submission::Register(req) => serde_json::to_value(req)?,
            Submission::Report(req) => serde_json::to_value(req)?,
        };
        Ok(body)
    }
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

pub struct ApiClient {
    transport: Box<dyn Transport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(transport: Box<dyn Transport>, session: SessionStore) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.request(Method::Get, path, None)?;
        Ok(serde_json::from_value(body)?)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let reply = self.request(Method::Post, path, Some(&body))?;
        Ok(serde_json::from_value(reply)?)
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let reply = self.request(Method::Put, path, Some(&body))?;
        Ok(serde_json::from_value(reply)?)
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::Delete, path, None)?;
        Ok(())
    }

    /// Post a typed submission to its endpoint.
    pub fn submit<T: DeserializeOwned>(&self, submission: &Submission) -> Result<T> {
        let body = submission.body()?;
        let reply = self.request(Method::Post, submission.path(), Some(&body))?;
        Ok(serde_json::from_value(reply)?)
    }

    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let token = self.session.token();
        debug!(%method, path, authenticated = token.is_some(), "api request");
        let resp = self
            .transport
            .send(method, path, body, token.as_deref())?;

        match resp.status {
            200..=299 => Ok(resp.body),
            401 => {
                warn!(%method, path, "token rejected, clearing session");
                if let Err(e) = self.session.clear() {
                    warn!(error = %e, "failed to clear session after 401");
                }
                Err(PriceTrackerError::Unauthorized(error_message(&resp.body, path)))
            }
            404 => Err(PriceTrackerError::NotFound(error_message(&resp.body, path))),
            status => {
                warn!(%method, path, status, "api error");
                Err(PriceTrackerError::Api {
                    status,
                    message: error_message(&resp.body, path),
                })
            }
        }
    }
}

/// Best-effort human message from an error body.
fn error_message(body: &Value, path: &str) -> String {
    match body {
        Value::String(s) if !s.trim().is_empty() => s.clone(),
        Value::Object(map) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.to_string()),
        _ => path.to_string(),
    }
}
