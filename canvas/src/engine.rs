use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::camera::{Point, ViewState};
use crate::frame::FrameSlot;
use crate::hit::PointerTarget;
use crate::ink::InkCapture;
use crate::input::{Button, InputMode, InputState, Key, Modifiers, WheelDelta};
use crate::notes::{NoteId, NoteStore, StickyNote};
use crate::raster::{InkSurface, Pen};
use crate::render::CanvasSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cancel any outstanding animation-frame request and request a new one.
    RequestFrame,
    /// Restyle the content layer with this view (emitted from a frame callback).
    ApplyTransform(ViewState),
    /// A note was created; the declarative note layer should render it.
    NoteAdded(StickyNote),
    /// A note moved to a new content-space position.
    NoteMoved { id: NoteId, x: f64, y: f64 },
    /// The ink overlay was resized and lost its pixels.
    InkCleared,
    /// Drawing or erase toggles changed.
    ModeChanged(InputMode),
}

/// Core engine state: all logic that does not touch the canvas element.
///
/// Generic over the ink surface so it can be tested with an in-memory
/// [`crate::raster::PixelBuffer`] without WASM/browser dependencies.
pub struct EngineCore<S> {
    pub notes: NoteStore,
    pub view: ViewState,
    pub mode: InputMode,
    pub input: InputState,
    pub ink: InkCapture<S>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    applied: ViewState,
    frame: FrameSlot,
    space_held: bool,
}

impl<S: InkSurface> EngineCore<S> {
    /// Create a surface holding the example note, at identity view, not drawing.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            notes: NoteStore::seeded(),
            view: ViewState::default(),
            mode: InputMode::default(),
            input: InputState::default(),
            ink: InkCapture::new(surface),
            viewport_width: 0.0,
            viewport_height: 0.0,
            applied: ViewState::default(),
            frame: FrameSlot::new(),
            space_held: false,
        }
    }

    // --- Notes ---

    /// Create a note at the default position.
    pub fn add_note(&mut self) -> Action {
        let note = self.notes.add_note().clone();
        log::debug!("note added: {}", note.id);
        Action::NoteAdded(note)
    }

    /// Move a note by a content-space delta. `None` if the id is unknown.
    pub fn drag_note(&mut self, id: &str, dx: f64, dy: f64) -> Option<Action> {
        if !self.notes.drag_note(id, dx, dy) {
            return None;
        }
        let note = self.notes.get(id)?;
        Some(Action::NoteMoved { id: note.id.clone(), x: note.x, y: note.y })
    }

    // --- Modes / viewport ---

    /// Enable or disable drawing mode.
    ///
    /// Enabling sizes the ink overlay to the viewport, which clears it. Disabling ends any
    /// stroke in progress but keeps the pixels.
    pub fn set_drawing(&mut self, enabled: bool) -> Vec<Action> {
        if self.mode.drawing == enabled {
            return Vec::new();
        }
        self.mode.drawing = enabled;
        let mut actions = Vec::new();
        if enabled {
            self.resize_ink();
            actions.push(Action::InkCleared);
        } else if self.input == InputState::Inking {
            self.ink.end();
            self.input = InputState::Idle;
        }
        log::debug!("drawing mode {}", if enabled { "on" } else { "off" });
        actions.push(Action::ModeChanged(self.mode));
        actions
    }

    pub fn toggle_drawing(&mut self) -> Vec<Action> {
        self.set_drawing(!self.mode.drawing)
    }

    /// Flip the erase toggle. Takes effect on the next painted segment.
    pub fn toggle_erase(&mut self) -> Action {
        self.mode.erase = !self.mode.erase;
        Action::ModeChanged(self.mode)
    }

    /// Record new viewport dimensions (CSS pixels).
    ///
    /// While drawing mode is enabled the ink overlay follows the viewport, and resizing it
    /// discards all existing ink. An interrupted stroke restarts on the next pointer-down.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport_width = width;
        self.viewport_height = height;
        if !self.mode.drawing {
            return Vec::new();
        }
        self.resize_ink();
        if self.input == InputState::Inking {
            self.input = InputState::Idle;
        }
        vec![Action::InkCleared]
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize_ink(&mut self) {
        let to_px = |v: f64| if v.is_finite() { v.round().clamp(0.0, f64::from(u32::MAX)) as u32 } else { 0 };
        let (w, h) = (to_px(self.viewport_width), to_px(self.viewport_height));
        log::debug!("ink overlay resized to {w}x{h}, ink cleared");
        self.ink.resize(w, h);
    }

    // --- Input events ---

    /// Route a pointer-down to the gesture its target allows.
    ///
    /// Ignored while another gesture is active.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, target: PointerTarget) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let pan_allowed = target.allows_pan();
        match target {
            PointerTarget::InkOverlay => {
                if self.mode.drawing {
                    self.ink.begin(screen_pt);
                    self.input = InputState::Inking;
                }
            }
            PointerTarget::Note(id) => {
                if self.notes.contains(&id) {
                    self.input = InputState::DraggingNote { id, last_screen: screen_pt };
                }
            }
            PointerTarget::Control | PointerTarget::Background => {
                if pan_allowed && self.space_held && button == Button::Primary {
                    self.input = InputState::Panning { last_screen: screen_pt };
                }
            }
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                let (dx, dy) = (screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                *last_screen = screen_pt;
                self.view.pan_by(dx, dy);
                self.schedule_frame()
            }
            InputState::DraggingNote { id, last_screen } => {
                let dx = self.view.screen_dist_to_content(screen_pt.x - last_screen.x);
                let dy = self.view.screen_dist_to_content(screen_pt.y - last_screen.y);
                *last_screen = screen_pt;
                let id = id.clone();
                self.drag_note(&id, dx, dy).into_iter().collect()
            }
            InputState::Inking => {
                let pen = Pen::for_erase_mode(self.mode.erasing());
                if !self.ink.extend(screen_pt, pen) {
                    self.input = InputState::Idle;
                }
                Vec::new()
            }
        }
    }

    /// End whatever gesture is active. Pointer-up anywhere in the window lands here.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.input == InputState::Inking {
            self.ink.end();
        }
        self.input = InputState::Idle;
        Vec::new()
    }

    /// The browser took the pointer away (`pointercancel`). Ends the gesture exactly like a release.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            log::debug!("pointer cancelled mid-gesture");
        }
        self.on_pointer_up()
    }

    /// Zoom around the pointer. Ctrl+wheel is left to the browser.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.ctrl {
            return Vec::new();
        }
        if !self.view.zoom_at(screen_pt, delta.dy) {
            return Vec::new();
        }
        self.schedule_frame()
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_pan_key() {
            self.space_held = true;
        }
        Vec::new()
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        if key.is_pan_key() {
            self.space_held = false;
        }
        Vec::new()
    }

    /// Apply the pending view transform, at most once per frame.
    pub fn on_animation_frame(&mut self) -> Option<Action> {
        if !self.frame.take() {
            return None;
        }
        self.applied = self.view;
        Some(Action::ApplyTransform(self.applied))
    }

    fn schedule_frame(&mut self) -> Vec<Action> {
        self.frame.schedule();
        vec![Action::RequestFrame]
    }

    // --- Queries ---

    /// All notes in paint order.
    #[must_use]
    pub fn notes(&self) -> &[StickyNote] {
        self.notes.as_slice()
    }

    /// Look up a note by id.
    #[must_use]
    pub fn note(&self, id: &str) -> Option<&StickyNote> {
        self.notes.get(id)
    }

    /// The view state input has produced so far.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The view state last applied to the content layer.
    #[must_use]
    pub fn applied_view(&self) -> ViewState {
        self.applied
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Whether the pan key is currently held.
    #[must_use]
    pub fn space_held(&self) -> bool {
        self.space_held
    }

    /// Whether a transform application is waiting for the next frame.
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame.is_pending()
    }
}

/// The full whiteboard engine. Wraps `EngineCore` and owns the ink overlay canvas.
pub struct Engine {
    pub core: EngineCore<CanvasSurface>,
}

impl Engine {
    /// Create a new engine bound to the given ink overlay canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        Ok(Self { core: EngineCore::new(CanvasSurface::new(canvas)?) })
    }

    // --- Delegated notes / modes ---

    pub fn add_note(&mut self) -> Action {
        self.core.add_note()
    }

    pub fn toggle_drawing(&mut self) -> Vec<Action> {
        self.core.toggle_drawing()
    }

    pub fn toggle_erase(&mut self) -> Action {
        self.core.toggle_erase()
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) -> Vec<Action> {
        self.core.set_viewport(width_css, height_css)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, target: PointerTarget) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, target)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_up(key)
    }

    pub fn on_animation_frame(&mut self) -> Option<Action> {
        self.core.on_animation_frame()
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn notes(&self) -> &[StickyNote] {
        self.core.notes()
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.core.mode()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.core.view()
    }
}
