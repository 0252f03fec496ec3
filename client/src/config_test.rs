use super::*;

#[test]
fn defaults_when_unset() {
    let config = ClientConfig::from_values(None, None, None);
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_base_url, "http://localhost:4000");
    assert_eq!(config.token_storage_key, "token");
    assert_eq!(config.toast_timeout_ms, 4000);
}

#[test]
fn overrides_are_applied() {
    let config = ClientConfig::from_values(Some("https://api.tracklab.dev"), Some("tl_session"), Some("2500"));
    assert_eq!(config.api_base_url, "https://api.tracklab.dev");
    assert_eq!(config.token_storage_key, "tl_session");
    assert_eq!(config.toast_timeout_ms, 2500);
}

#[test]
fn trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_values(Some("http://example.test///"), None, None);
    assert_eq!(config.api_base_url, "http://example.test");
}

#[test]
fn blank_values_fall_back() {
    let config = ClientConfig::from_values(Some("   "), Some(""), Some(" "));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn invalid_toast_timeout_falls_back() {
    assert_eq!(ClientConfig::from_values(None, None, Some("soon")).toast_timeout_ms, 4000);
    assert_eq!(ClientConfig::from_values(None, None, Some("-5")).toast_timeout_ms, 4000);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint("/api/auth/login"), "http://localhost:4000/api/auth/login");
    assert_eq!(config.endpoint("api/auth/register"), "http://localhost:4000/api/auth/register");
}
