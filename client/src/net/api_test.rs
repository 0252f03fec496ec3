use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_returns_token() {
    assert_eq!(map_login_response(200, r#"{"token":"a.b.c"}"#), Ok("a.b.c".to_owned()));
}

#[test]
fn login_success_ignores_extra_fields() {
    assert_eq!(map_login_response(201, r#"{"token":"t.t.t","user":{"id":1}}"#), Ok("t.t.t".to_owned()));
}

#[test]
fn login_rejection_uses_server_message() {
    assert_eq!(
        map_login_response(401, r#"{"error":"Wrong password"}"#),
        Err(AuthError::Rejected("Wrong password".to_owned()))
    );
}

#[test]
fn login_rejection_without_message_falls_back() {
    assert_eq!(map_login_response(401, "{}"), Err(AuthError::Rejected(LOGIN_FALLBACK_ERROR.to_owned())));
    assert_eq!(map_login_response(400, r#"{"error":"  "}"#), Err(AuthError::Rejected(LOGIN_FALLBACK_ERROR.to_owned())));
}

#[test]
fn login_rejection_with_non_json_body_is_malformed() {
    assert!(matches!(map_login_response(502, "<html>Bad Gateway</html>"), Err(AuthError::Malformed(_))));
}

#[test]
fn login_success_without_token_is_malformed() {
    assert!(matches!(map_login_response(200, "{}"), Err(AuthError::Malformed(_))));
    assert!(matches!(map_login_response(200, r#"{"token":""}"#), Err(AuthError::Malformed(_))));
    assert!(matches!(map_login_response(200, "not json"), Err(AuthError::Malformed(_))));
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_success_accepts_any_body() {
    assert_eq!(map_register_response(201, r#"{"id":5}"#), Ok(()));
    assert_eq!(map_register_response(200, ""), Ok(()));
}

#[test]
fn register_rejection_uses_server_message() {
    assert_eq!(
        map_register_response(409, r#"{"error":"Email already registered"}"#),
        Err(AuthError::Rejected("Email already registered".to_owned()))
    );
}

#[test]
fn register_rejection_without_message_falls_back() {
    assert_eq!(map_register_response(500, "{}"), Err(AuthError::Rejected(REGISTER_FALLBACK_ERROR.to_owned())));
}

#[test]
fn register_rejection_with_unreadable_body_is_malformed() {
    assert!(matches!(map_register_response(500, ""), Err(AuthError::Malformed(_))));
    assert!(matches!(map_register_response(503, "Service Unavailable"), Err(AuthError::Malformed(_))));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn rejected_error_displays_bare_message() {
    assert_eq!(AuthError::Rejected("Nope".to_owned()).to_string(), "Nope");
}

#[test]
fn status_boundaries() {
    assert!(!is_success(199));
    assert!(is_success(200));
    assert!(is_success(299));
    assert!(!is_success(300));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let config = ClientConfig::default();
    let creds = Credentials { email: "a@b.c".into(), password: "pw".into() };
    let result = block_on(login(&config, &creds));
    assert_eq!(result, Err(AuthError::Unavailable));
}

/// Polls a future that is expected to finish on its first poll.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete synchronously"),
    }
}
