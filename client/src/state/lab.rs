//! Reactive mirror of the lab surface for the declarative layers.
//!
//! The engine owns the authoritative note positions and modes. After each
//! handler the host copies what changed into `LabState` so the note layer and
//! toolbar re-render; nothing here feeds back into the engine.
//!
//! Each note carries its own position signal. A drag move touches only that
//! signal, so only the dragged note restyles; the note list itself changes
//! only when a note is added.

#[cfg(test)]
#[path = "lab_test.rs"]
mod lab_test;

use leptos::prelude::*;

/// A note's content-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NotePosition {
    pub x: f64,
    pub y: f64,
}

impl NotePosition {
    /// Inline style placing the note in content space.
    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

/// A sticky note as the note layer renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteView {
    pub id: String,
    pub text: String,
    pub position: RwSignal<NotePosition>,
}

impl NoteView {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), text: text.into(), position: RwSignal::new(NotePosition { x, y }) }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabState {
    /// Notes in paint order.
    pub notes: Vec<NoteView>,
    pub drawing: bool,
    pub erase: bool,
}

impl LabState {
    /// Append a note unless one with the same id is already shown.
    pub fn note_added(&mut self, note: NoteView) {
        if self.notes.iter().any(|n| n.id == note.id) {
            return;
        }
        self.notes.push(note);
    }

    /// Move a shown note through its position signal. Returns `false` for an unknown id.
    ///
    /// Takes `&self`: call it under `with_untracked` so the note list does not notify.
    pub fn note_moved(&self, id: &str, x: f64, y: f64) -> bool {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            return false;
        };
        note.position.set(NotePosition { x, y });
        true
    }

    pub fn mode_changed(&mut self, drawing: bool, erase: bool) {
        self.drawing = drawing;
        self.erase = erase;
    }

    /// Class list for the board container.
    #[must_use]
    pub fn board_class(&self) -> &'static str {
        if self.drawing { "lab-board lab-board--drawing" } else { "lab-board" }
    }
}
