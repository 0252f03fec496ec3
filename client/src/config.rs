//! Client configuration baked in at compile time.
//!
//! The bundle is static, so settings come from `option_env!` when the crate is
//! built rather than from the runtime environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Auth API origin, without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the session token.
    pub token_storage_key: String,
    /// How long a toast stays on screen.
    pub toast_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build the config from compile-time environment variables.
    ///
    /// Optional:
    /// - `TRACKLAB_API_BASE_URL`: default `http://localhost:4000`
    /// - `TRACKLAB_TOKEN_KEY`: default `token`
    /// - `TRACKLAB_TOAST_MS`: default 4000
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TRACKLAB_API_BASE_URL"),
            option_env!("TRACKLAB_TOKEN_KEY"),
            option_env!("TRACKLAB_TOAST_MS"),
        )
    }

    /// Resolve each setting, falling back to its default when absent, blank or unparseable.
    #[must_use]
    pub fn from_values(api_base_url: Option<&str>, token_key: Option<&str>, toast_ms: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = non_blank(token_key).unwrap_or(DEFAULT_TOKEN_STORAGE_KEY).to_owned();
        let toast_timeout_ms = parse_u32(toast_ms, DEFAULT_TOAST_TIMEOUT_MS);
        Self { api_base_url, token_storage_key, toast_timeout_ms }
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_u32(raw: Option<&str>, default: u32) -> u32 {
    non_blank(raw).and_then(|v| v.parse::<u32>().ok()).unwrap_or(default)
}
