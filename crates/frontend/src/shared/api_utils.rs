//! API utilities for console-backend communication
//!
//! Provides the resolved base URL, the error type shared by every backend call
//! and thin `gloo-net` helpers that map transport, status and decoding failures
//! onto it.

use crate::shared::config::config;
use gloo_net::http::{Request, Response};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

static API_BASE: OnceCell<String> = OnceCell::new();

/// Get the base URL for API requests
///
/// Resolved once per page load: the configured override if present, otherwise
/// the page origin followed by the configured path prefix.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/resources/{}.sql", api_base(), 5);
/// ```
pub fn api_base() -> &'static str {
    API_BASE.get_or_init(|| {
        let api = &config().api;
        if let Some(base) = &api.base_url_override {
            return base.clone();
        }
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let base = join_base(&origin, &api.path_prefix);
        log::info!("API base URL: {}", base);
        base
    })
}

/// Build a full API URL from a path such as `/query`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn join_base(origin: &str, prefix: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        origin.to_string()
    } else {
        format!("{}/{}", origin, prefix)
    }
}

fn checked(response: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// GET a JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = checked(Request::get(url).send().await)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// GET a plain text body
pub async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = checked(Request::get(url).send().await)?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// POST a JSON body and decode a JSON response
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = checked(request.send().await)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("http://localhost:8080", "/api"), "http://localhost:8080/api");
        assert_eq!(join_base("https://example.com/", "api/"), "https://example.com/api");
        assert_eq!(join_base("https://example.com", ""), "https://example.com");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(502).to_string(), "HTTP error: 502");
        assert_eq!(
            ApiError::Malformed("missing field `result`".into()).to_string(),
            "Failed to parse response: missing field `result`"
        );
    }
}
