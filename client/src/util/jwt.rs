//! JWT payload decoding.
//!
//! The client only reads the claims it needs for display and expiry. The
//! signature is not checked here; the auth server does that on every call.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::TokenClaims;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Format,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token claims are invalid: {0}")]
    Claims(String),
}

/// Decode the payload segment of `token` into [`TokenClaims`].
///
/// # Errors
///
/// Returns [`TokenError`] if the token is not three dot-separated segments, if
/// the payload is not base64url, or if the payload JSON lacks the expected claims.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Format);
    };
    if payload.is_empty() {
        return Err(TokenError::Format);
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}
