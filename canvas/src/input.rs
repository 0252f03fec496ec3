//! Input model: modes, modifier keys, mouse buttons, and the gesture state machine.
//!
//! This module defines the types consumed by the input engine. `InputMode`
//! and `Modifiers` capture the user's intent at the time of a pointer event.
//! `InputState` is the single active gesture between pointer-down and
//! pointer-up; only one of pan, note drag or ink stroke can be live at once.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::notes::NoteId;

/// Key code that arms panning while held.
pub const PAN_KEY: &str = "Space";

/// Drawing and erasing toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputMode {
    /// The ink overlay intercepts pointer input.
    pub drawing: bool,
    /// Ink strokes erase instead of paint. Only meaningful while `drawing`.
    pub erase: bool,
}

impl InputMode {
    /// Whether strokes currently erase.
    #[must_use]
    pub fn erasing(self) -> bool {
        self.drawing && self.erase
    }
}

/// Modifier keys the engine cares about during a wheel event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Ctrl is held; the browser keeps Ctrl+wheel for page zoom.
    pub ctrl: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Back/forward or any other auxiliary button.
    Other,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// A keyboard key, by physical code as reported by the browser (e.g. `"Space"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the key that arms panning.
    #[must_use]
    pub fn is_pan_key(&self) -> bool {
        self.0 == PAN_KEY
    }
}

/// Wheel / trackpad scroll delta. Only the vertical axis zooms.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the content layer with Space held.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// The user is moving a sticky note.
    DraggingNote {
        /// Id of the note being dragged.
        id: NoteId,
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The ink overlay owns the gesture; see [`crate::ink::InkCapture`].
    Inking,
}

impl InputState {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
