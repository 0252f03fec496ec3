//! Registration page. A created account is sent back to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api;
use crate::pages::auth_form::{AuthForm, auth_error_message, validate_credentials};
use crate::state::toast::{ACCOUNT_CREATED_MESSAGE, ToastKind, ToastState, show_toast};
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

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
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let timeout = config.toast_timeout_ms;
            match api::register(&config, &credentials).await {
                Ok(()) => {
                    log::info!("account created for {}", credentials.email);
                    show_toast(toasts, timeout, ToastKind::Success, ACCOUNT_CREATED_MESSAGE);
                    email.set(String::new());
                    password.set(String::new());
                    navigate(LOGIN_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
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
                    title="Create an account"
                    submit_label="Sign up"
                    email=email
                    password=password
                    busy=busy
                    info=info
                    password_autocomplete="new-password"
                    on_submit=on_submit
                >
                    "Already registered? "
                    <A href=LOGIN_ROUTE>"Sign in"</A>
                </AuthForm>
            </div>
        </div>
    }
}
