//! Login page: email + password against the auth API.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api;
use crate::pages::auth_form::{AuthForm, auth_error_message, validate_credentials};
use crate::state::session::{SessionState, sign_in};
use crate::state::toast::{NETWORK_ERROR_MESSAGE, SIGNED_IN_MESSAGE, ToastKind, ToastState, show_toast};
use crate::util::auth::{REGISTER_ROUTE, install_lab_redirect};

/// Login form. Moves on to `/lab` once the session is signed in.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ClientConfig>();
    install_lab_redirect(session, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move || {
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        let config = config.clone();
        leptos::task::spawn_local(async move {
            let timeout = config.toast_timeout_ms;
            match api::login(&config, &credentials).await {
                Ok(token) => match sign_in(session, &config, token) {
                    Ok(()) => show_toast(toasts, timeout, ToastKind::Success, SIGNED_IN_MESSAGE),
                    Err(e) => {
                        log::error!("login returned an unusable token: {e}");
                        show_toast(toasts, timeout, ToastKind::Error, NETWORK_ERROR_MESSAGE);
                    }
                },
                Err(e) => {
                    log::warn!("login failed: {e}");
                    show_toast(toasts, timeout, ToastKind::Error, auth_error_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <AuthForm
                    title="Sign in"
                    submit_label="Sign in"
                    email=email
                    password=password
                    busy=busy
                    info=info
                    password_autocomplete="current-password"
                    on_submit=on_submit
                >
                    "No account yet? "
                    <A href=REGISTER_ROUTE>"Create one"</A>
                </AuthForm>
            </div>
        </div>
    }
}
