//! Auth API client.
//!
//! Browser builds (`csr`) make real HTTP calls via `gloo-net`. Other builds
//! return [`AuthError::Unavailable`] so pages and tests compile natively.
//!
//! ERROR HANDLING
//! ==============
//! Response interpretation lives in pure `map_*` functions so status/body
//! handling is testable without a browser. Pages turn every error into a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, ErrorBody, LoginResponse};
use crate::config::ClientConfig;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Shown when a rejected login carries no server message.
pub const LOGIN_FALLBACK_ERROR: &str = "Invalid credentials";
/// Shown when a rejected registration carries no server message.
pub const REGISTER_FALLBACK_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Rejected(String),
    /// A response body that could not be understood.
    #[error("unexpected response: {0}")]
    Malformed(String),
    #[error("auth API is only available in the browser")]
    Unavailable,
}

/// Log in with `credentials` and return the issued token.
///
/// # Errors
///
/// Returns [`AuthError`] on transport failure, rejection, or an unreadable body.
pub async fn login(config: &ClientConfig, credentials: &Credentials) -> Result<String, AuthError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = post_json(&config.endpoint(LOGIN_PATH), credentials).await?;
        map_login_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, credentials);
        Err(AuthError::Unavailable)
    }
}

/// Create an account with `credentials`.
///
/// # Errors
///
/// Returns [`AuthError`] on transport failure or rejection.
pub async fn register(config: &ClientConfig, credentials: &Credentials) -> Result<(), AuthError> {
    #[cfg(feature = "csr")]
    {
        let (status, body) = post_json(&config.endpoint(REGISTER_PATH), credentials).await?;
        map_register_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, credentials);
        Err(AuthError::Unavailable)
    }
}

#[cfg(feature = "csr")]
async fn post_json(url: &str, credentials: &Credentials) -> Result<(u16, String), AuthError> {
    log::debug!("POST {url}");
    let resp = gloo_net::http::Request::post(url)
        .json(credentials)
        .map_err(|e| AuthError::Malformed(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
    Ok((status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a non-2xx body to [`AuthError::Rejected`] with the server's `error`
/// message, or `fallback` when the JSON carries none. A body that is not JSON
/// at all came from something other than the auth API and is `Malformed`.
fn rejection(body: &str, fallback: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => AuthError::Rejected(
            parsed
                .error
                .map(|msg| msg.trim().to_owned())
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
        ),
        Err(e) => AuthError::Malformed(format!("unreadable error body: {e}")),
    }
}

fn map_login_response(status: u16, body: &str) -> Result<String, AuthError> {
    if !is_success(status) {
        return Err(rejection(body, LOGIN_FALLBACK_ERROR));
    }
    let parsed: LoginResponse = serde_json::from_str(body).map_err(|e| AuthError::Malformed(e.to_string()))?;
    if parsed.token.trim().is_empty() {
        return Err(AuthError::Malformed("empty token".to_owned()));
    }
    Ok(parsed.token)
}

fn map_register_response(status: u16, body: &str) -> Result<(), AuthError> {
    if is_success(status) {
        return Ok(());
    }
    Err(rejection(body, REGISTER_FALLBACK_ERROR))
}
