#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::notes::NoteId;

/// What a pointer-down landed on, after arbitration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// The ink overlay. Only reachable while drawing mode is enabled.
    InkOverlay,
    /// A sticky note.
    Note(NoteId),
    /// A button or other toolbar control.
    Control,
    /// Empty whiteboard background; the only place a pan can start.
    Background,
}

impl PointerTarget {
    /// Whether a space-held primary press on this target may start a pan.
    #[must_use]
    pub fn allows_pan(&self) -> bool {
        matches!(self, Self::Background)
    }
}

/// Raw facts the host gathers about the element under the pointer.
#[derive(Debug, Clone, Default)]
pub struct TargetProbe {
    /// Id of the enclosing note element, if any.
    pub note_id: Option<NoteId>,
    /// Whether the element is (inside) a button or control.
    pub in_control: bool,
}

/// Resolve the pointer target in priority order: ink overlay, note, control, background.
///
/// While drawing mode is on the overlay sits above the content layer and swallows every
/// press, so nothing beneath it is reachable.
#[must_use]
pub fn resolve_target(drawing_enabled: bool, probe: TargetProbe) -> PointerTarget {
    if drawing_enabled {
        return PointerTarget::InkOverlay;
    }
    if let Some(id) = probe.note_id {
        return PointerTarget::Note(id);
    }
    if probe.in_control {
        return PointerTarget::Control;
    }
    PointerTarget::Background
}
