//! Note model: sticky notes and the in-memory store that owns them.
//!
//! Notes live in content space, so their positions are unaffected by pan and
//! zoom; the host applies the view transform to the whole content layer. The
//! store keeps notes in insertion order, which is also their paint order.
//! Nothing here deletes a note.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use uuid::Uuid;

use crate::consts::{NEW_NOTE_TEXT, NEW_NOTE_X, NEW_NOTE_Y, SEED_NOTE_ID, SEED_NOTE_TEXT, SEED_NOTE_X, SEED_NOTE_Y};

/// Unique identifier for a sticky note.
pub type NoteId = String;

/// A sticky note on the whiteboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StickyNote {
    /// Unique identifier for this note.
    pub id: NoteId,
    /// Text shown on the note.
    pub text: String,
    /// Left edge in content coordinates.
    pub x: f64,
    /// Top edge in content coordinates.
    pub y: f64,
}

impl StickyNote {
    #[must_use]
    pub fn new(id: impl Into<NoteId>, text: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), text: text.into(), x, y }
    }
}

/// In-memory store of sticky notes.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<StickyNote>,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Create a store holding the single example note every surface starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self { notes: vec![StickyNote::new(SEED_NOTE_ID, SEED_NOTE_TEXT, SEED_NOTE_X, SEED_NOTE_Y)] }
    }

    /// Append a new note at the default position with a fresh id and default text.
    pub fn add_note(&mut self) -> &StickyNote {
        let mut id = Uuid::new_v4().to_string();
        while self.contains(&id) {
            id = Uuid::new_v4().to_string();
        }
        let index = self.notes.len();
        self.notes.push(StickyNote::new(id, NEW_NOTE_TEXT, NEW_NOTE_X, NEW_NOTE_Y));
        &self.notes[index]
    }

    /// Move a note by a content-space delta. Returns `false` if no note has `id`.
    pub fn drag_note(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.x += dx;
        note.y += dy;
        true
    }

    /// Return a reference to a note by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StickyNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Whether a note with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All notes in paint order (oldest first).
    #[must_use]
    pub fn as_slice(&self) -> &[StickyNote] {
        &self.notes
    }

    /// Number of notes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if the store contains no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
