use super::*;
use crate::net::types::User;

fn signed_in() -> SessionState {
    SessionState {
        token: Some("h.p.s".to_owned()),
        user: Some(User { id: "u1".to_owned(), email: "ada@tracklab.dev".to_owned() }),
    }
}

#[test]
fn signed_out_session_redirects_to_login() {
    assert!(should_redirect_unauth(&SessionState::default()));
}

#[test]
fn signed_in_session_stays() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn login_page_forwards_signed_in_user() {
    assert!(should_enter_lab(&signed_in()));
    assert!(!should_enter_lab(&SessionState::default()));
}

#[test]
fn login_page_waits_for_user() {
    let state = SessionState { token: Some("h.p.s".to_owned()), user: None };
    assert!(!should_enter_lab(&state));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn routes_are_absolute() {
    for route in [LOGIN_ROUTE, REGISTER_ROUTE, LAB_ROUTE] {
        assert!(route.starts_with('/'));
    }
}
