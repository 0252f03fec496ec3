//! Route guards driven by the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lab must bounce signed-out visitors to `/login`, and the login page
//! must move signed-in users on to `/lab`. Both read the same session signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const LAB_ROUTE: &str = "/lab";

/// Whether a protected page should send this session to the login page.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_authenticated()
}

/// Whether the login page should forward this session to the lab.
#[must_use]
pub fn should_enter_lab(state: &SessionState) -> bool {
    state.is_authenticated() && state.user.is_some()
}

/// Redirect to `/login` whenever the session is signed out.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/lab` as soon as the session is signed in.
pub fn install_lab_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_enter_lab(&session.get()) {
            navigate(LAB_ROUTE, NavigateOptions::default());
        }
    });
}
