//! Lab header: title, signed-in user, surface toggles and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toolbar sits outside the whiteboard so its presses never reach
//! pointer arbitration. Button actions are forwarded to the surface host,
//! which owns the engine.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::lab::LabState;
use crate::state::session::{SessionState, sign_out};

/// Toolbar for the lab page.
#[component]
pub fn LabToolbar(
    lab: RwSignal<LabState>,
    on_add_note: impl Fn() + 'static,
    on_toggle_drawing: impl Fn() + 'static,
    on_toggle_erase: impl Fn() + 'static,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();

    let email = move || session.with(|s| s.email().unwrap_or_default().to_owned());
    let draw_class = move || if lab.with(|s| s.drawing) { "btn lab-toolbar__toggle active" } else { "btn lab-toolbar__toggle" };
    let erase_class = move || if lab.with(|s| s.erase) { "btn lab-toolbar__toggle active" } else { "btn lab-toolbar__toggle" };

    let on_logout = move |_| {
        log::info!("signing out");
        sign_out(session, &config);
    };

    view! {
        <div class="lab-toolbar">
            <span class="lab-toolbar__title">"TrackLab – Visual Lab"</span>
            <span class="lab-toolbar__spacer"></span>
            <span class="lab-toolbar__self">"Signed in as " {email}</span>
            <button class="btn" on:click=move |_| on_add_note() title="Add a sticky note">
                "+ Note"
            </button>
            <button class=draw_class on:click=move |_| on_toggle_drawing() title="Toggle drawing">
                "✏️"
            </button>
            <button class=erase_class on:click=move |_| on_toggle_erase() title="Toggle eraser">
                "🧽"
            </button>
            <button class="btn lab-toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </div>
    }
}
