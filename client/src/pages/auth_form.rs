//! Form handling shared by the login and register pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::net::api::AuthError;
use crate::net::types::Credentials;
use crate::state::toast::NETWORK_ERROR_MESSAGE;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is kept verbatim.
///
/// # Errors
///
/// Returns the message to show when either field is missing.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// The toast text for a failed auth call.
#[must_use]
pub fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Rejected(message) => message.clone(),
        AuthError::Network(_) | AuthError::Malformed(_) | AuthError::Unavailable => NETWORK_ERROR_MESSAGE.to_owned(),
    }
}

/// Email + password card used by both auth pages.
#[component]
pub fn AuthForm(
    title: &'static str,
    submit_label: &'static str,
    email: RwSignal<String>,
    password: RwSignal<String>,
    busy: RwSignal<bool>,
    info: RwSignal<String>,
    /// Autocomplete hint for the password field.
    password_autocomplete: &'static str,
    on_submit: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    view! {
        <form
            class="auth-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit();
            }
        >
            <h2 class="auth-form__title">{title}</h2>
            <input
                class="auth-input"
                type="email"
                placeholder="Email"
                autocomplete="email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                autocomplete=password_autocomplete
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-form__message">{move || info.get()}</p>
            </Show>
            <div class="auth-form__footer">{children()}</div>
        </form>
    }
}
