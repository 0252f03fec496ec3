//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::ClientConfig;
use crate::pages::{lab::LabPage, login::LoginPage, register::RegisterPage};
use crate::state::session::restore_session;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Resolves the client config, restores any stored session, provides the
/// shared contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    log::debug!("api base url: {}", config.api_base_url);
    let session = RwSignal::new(restore_session(&config));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="tracklab" href="/style.css"/>
        <Title text="TrackLab"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("lab") view=LabPage/>
                <Route path=StaticSegment("") view=LabPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
