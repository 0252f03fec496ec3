//! A single sticky note in the lab content layer.

use leptos::prelude::*;

use crate::state::lab::{NotePosition, NoteView};

/// Positioned note element. `data-note-id` lets pointer arbitration find it.
///
/// The style reads only this note's position signal, so dragging one note
/// never restyles the others.
#[component]
pub fn StickyNote(note: NoteView) -> impl IntoView {
    let NoteView { id, text, position } = note;

    view! {
        <div class="note" data-note-id=id style=move || position.with(NotePosition::style)>
            {text}
        </div>
    }
}
