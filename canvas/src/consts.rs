//! Shared numeric constants for the canvas crate.

// ── View transform ──────────────────────────────────────────────

/// Smallest allowed zoom scale.
pub const MIN_SCALE: f64 = 0.2;

/// Largest allowed zoom scale.
pub const MAX_SCALE: f64 = 3.0;

/// Scale change per wheel pixel; `1 - delta_y * WHEEL_ZOOM_RATE` is the zoom factor.
pub const WHEEL_ZOOM_RATE: f64 = 0.001;

// ── Ink ─────────────────────────────────────────────────────────

/// Line width of the ink pen, in overlay pixels.
pub const INK_WIDTH_PX: f64 = 2.0;

/// Line width of the eraser, in overlay pixels.
pub const ERASE_WIDTH_PX: f64 = 20.0;

/// Ink colour as RGB (`#111111`).
pub const INK_RGB: [u8; 3] = [0x11, 0x11, 0x11];

// ── Notes ───────────────────────────────────────────────────────

/// Content-space position of notes created via `add_note`.
pub const NEW_NOTE_X: f64 = 200.0;
pub const NEW_NOTE_Y: f64 = 200.0;

/// Default text of notes created via `add_note`.
pub const NEW_NOTE_TEXT: &str = "New note";

/// Id, text and position of the note every surface starts with.
pub const SEED_NOTE_ID: &str = "1";
pub const SEED_NOTE_TEXT: &str = "Example sticky note";
pub const SEED_NOTE_X: f64 = 100.0;
pub const SEED_NOTE_Y: f64 = 100.0;
