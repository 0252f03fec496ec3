//! Protected route hosting the whiteboard surface.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::lab_surface::LabSurface;
use crate::state::session::SessionState;
use crate::util::auth::{install_unauth_redirect, should_enter_lab};

/// Lab page. Signed-out visitors are sent to `/login` and see nothing meanwhile.
#[component]
pub fn LabPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show when=move || session.with(should_enter_lab)>
            <LabSurface/>
        </Show>
    }
}
