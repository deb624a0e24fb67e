use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://192.168.1.9:8080";
pub const API_URL_ENV: &str = "PRICE_TRACKER_API_URL";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Probed after a transport failure to tell "no internet" from "server down".
pub const CONNECTIVITY_PROBE_URL: &str = "https://www.google.com";
pub const CONNECTIVITY_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const PRODUCTS_PATH: &str = "/api/produits";
pub const PRICES_PATH: &str = "/api/prix";
pub const REGIONS_PATH: &str = "/api/regions";
pub const REPORTS_PATH: &str = "/api/signalements";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// History length for product detail views.
pub const DEFAULT_HISTORY_LIMIT: usize = 30;
/// History length for list rows and mini charts.
pub const COMPACT_HISTORY_LIMIT: usize = 7;

/// Resolve the backend base URL: explicit value, then environment, then default.
pub fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn default_session_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("price-tracker-sdk")
    } else {
        PathBuf::from(".price-tracker-session")
    }
}
