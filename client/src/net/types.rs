//! Auth API DTOs and token claim types.
//!
//! DESIGN
//! ======
//! Field names follow the auth server's JSON (`camelCase` claims, bare
//! `token`/`error` bodies). Numeric ids are accepted as strings so the client
//! does not care how the server's user table keys its rows.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user, as far as the client knows from the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// JWT payload issued by the auth server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub email: String,
    /// Expiry, seconds since the Unix epoch. Tokens without one never expire client-side.
    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub exp: Option<i64>,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub iat: Option<i64>,
}

impl TokenClaims {
    #[must_use]
    pub fn user(&self) -> User {
        User { id: self.user_id.clone(), email: self.email.clone() }
    }

    /// Whether the token is past its expiry at `now_secs`.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Body of `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Optional timestamp claim: absent or `null` is `None`, fractions are floored.
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Number(number) => number,
        other => return Err(D::Error::custom(format!("expected numeric timestamp, got {other}"))),
    };
    if let Some(int) = number.as_i64() {
        return Ok(Some(int));
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(Some(float.floor() as i64));
    }
    Err(D::Error::custom(format!("timestamp {number} out of range")))
}
