//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App`, provided as `RwSignal<SessionState>`, and read by
//! route guards and the lab header. Only the auth pages and logout write it.
//! Persistence of the raw token goes through `util::token_store`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::User;
use crate::util::jwt::{TokenError, decode_claims};
use crate::util::token_store;

/// Token plus the user decoded from it. Both are set together or not at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Email of the signed-in user, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Adopt `token`, replacing any current session.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] and leaves the state untouched if the token cannot be decoded.
    pub fn login(&mut self, token: String) -> Result<(), TokenError> {
        let claims = decode_claims(&token)?;
        self.user = Some(claims.user());
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Rebuild a session from a previously stored token.
    ///
    /// Undecodable or expired tokens yield a signed-out session.
    #[must_use]
    pub fn restore(stored: Option<String>, now_secs: i64) -> Self {
        let Some(token) = stored else {
            return Self::default();
        };
        match decode_claims(&token) {
            Ok(claims) if claims.is_expired(now_secs) => {
                log::info!("stored session token expired; signing out");
                Self::default()
            }
            Ok(claims) => Self { token: Some(token), user: Some(claims.user()) },
            Err(e) => {
                log::warn!("discarding stored session token: {e}");
                Self::default()
            }
        }
    }
}

/// Load the session from storage at startup, clearing storage if the token was discarded.
pub fn restore_session(config: &ClientConfig) -> SessionState {
    let stored = token_store::load(&config.token_storage_key);
    let had_token = stored.is_some();
    let session = SessionState::restore(stored, now_secs());
    if had_token && !session.is_authenticated() {
        token_store::clear(&config.token_storage_key);
    }
    session
}

/// Decode and persist `token`, then publish the new session.
///
/// # Errors
///
/// Returns [`TokenError`] if the token cannot be decoded; nothing is stored in that case.
pub fn sign_in(session: RwSignal<SessionState>, config: &ClientConfig, token: String) -> Result<(), TokenError> {
    let mut next = session.get_untracked();
    next.login(token.clone())?;
    token_store::save(&config.token_storage_key, &token);
    log::info!("signed in as {}", next.email().unwrap_or_default());
    session.set(next);
    Ok(())
}

/// Clear the stored token and the session.
pub fn sign_out(session: RwSignal<SessionState>, config: &ClientConfig) {
    token_store::clear(&config.token_storage_key);
    session.update(SessionState::logout);
    log::info!("signed out");
}

/// Current wall-clock time in whole seconds since the Unix epoch.
fn now_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
