//! HTTP utilities for upstream API communication

use crate::{core::session::AccessToken, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Base path for the Yahoo Fantasy Sports v2 API.
pub const FANTASY_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// Build `Accept` and bearer `Authorization` headers for an access token.
pub fn bearer_header_map(token: &AccessToken) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.secret()))?;
    auth.set_sensitive(true);
    h.insert(AUTHORIZATION, auth);
    Ok(h)
}

/// Pick the upstream base URL: an override (trailing slashes trimmed) or the
/// public API.
pub fn resolve_base_url(override_url: Option<String>) -> String {
    override_url
        .map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| FANTASY_BASE_URL.to_string())
}
