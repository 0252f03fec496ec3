//! Bridge component between Leptos state and the imperative `tracklab_canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the view transform, note positions, gesture state and the
//! ink raster. This host feeds it DOM input in surface-local coordinates and
//! turns the returned actions into DOM work: note updates go through the
//! reactive `LabState` mirror, transform updates are written straight to the
//! content layer from an animation frame, and ink is painted by the engine.

use leptos::prelude::*;

use crate::components::lab_toolbar::LabToolbar;
use crate::components::sticky_note::StickyNote;
use crate::state::lab::{LabState, NoteView};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use tracklab_canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use tracklab_canvas::hit::{PointerTarget, resolve_target};
#[cfg(feature = "csr")]
use tracklab_canvas::notes::StickyNote as CanvasNote;

#[cfg(feature = "csr")]
use crate::util::canvas_input::{
    map_button, map_key, map_modifiers, pointer_point, probe_target, wheel_delta, wheel_point,
};
#[cfg(feature = "csr")]
use crate::util::frame_scheduler::{SharedFrameScheduler, schedule_frame};

/// Size of the pannable content layer in content pixels.
const CONTENT_SIZE_PX: u32 = 3000;

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "csr")]
fn note_view(note: &CanvasNote) -> NoteView {
    NoteView::new(note.id.clone(), note.text.clone(), note.x, note.y)
}

#[cfg(feature = "csr")]
fn apply_transform(content_ref: NodeRef<leptos::html::Div>, transform: &str) {
    let Some(content) = content_ref.get_untracked() else {
        return;
    };
    if let Err(e) = content.style().set_property("transform", transform) {
        log::warn!("failed to apply content transform: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn board_size(board_ref: NodeRef<leptos::html::Div>) -> Option<(f64, f64)> {
    let board = board_ref.get_untracked()?;
    let rect = board.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

/// Everything the DOM handlers need to drive the engine.
#[cfg(feature = "csr")]
#[derive(Clone)]
struct SurfaceHost {
    engine: SharedEngine,
    frames: SharedFrameScheduler,
    board_ref: NodeRef<leptos::html::Div>,
    content_ref: NodeRef<leptos::html::Div>,
    lab: RwSignal<LabState>,
}

#[cfg(feature = "csr")]
impl SurfaceHost {
    /// Run `f` against the mounted engine. `None` before mount or while the engine is busy.
    fn with_engine<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        let mut slot = self.engine.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }

    /// Run an engine handler, then process its actions with the engine released.
    fn dispatch(&self, f: impl FnOnce(&mut Engine) -> Vec<Action>) {
        if let Some(actions) = self.with_engine(f) {
            self.process_actions(actions);
        }
    }

    fn process_actions(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::RequestFrame => self.request_frame(),
                Action::ApplyTransform(view) => apply_transform(self.content_ref, &view.css_transform()),
                Action::NoteAdded(note) => self.lab.update(|state| state.note_added(note_view(&note))),
                Action::NoteMoved { id, x, y } => {
                    // Untracked: only the note's own position signal notifies.
                    if !self.lab.with_untracked(|state| state.note_moved(&id, x, y)) {
                        log::debug!("moved note {id} is not rendered");
                    }
                }
                Action::InkCleared => log::debug!("ink overlay cleared"),
                Action::ModeChanged(mode) => self.lab.update(|state| state.mode_changed(mode.drawing, mode.erase)),
            }
        }
    }

    /// Apply the pending transform on the next animation frame, replacing any earlier request.
    fn request_frame(&self) {
        let engine = Rc::clone(&self.engine);
        let content_ref = self.content_ref;
        schedule_frame(&self.frames, move || {
            let applied = engine.try_borrow_mut().ok().and_then(|mut slot| slot.as_mut().and_then(Engine::on_animation_frame));
            if let Some(Action::ApplyTransform(view)) = applied {
                apply_transform(content_ref, &view.css_transform());
            }
        });
    }

    fn sync_viewport(&self) {
        if let Some((width, height)) = board_size(self.board_ref) {
            self.dispatch(|engine| engine.set_viewport(width, height));
        }
    }
}

/// Whiteboard surface: toolbar, pannable note layer and the ink overlay.
#[component]
pub fn LabSurface() -> impl IntoView {
    let lab = RwSignal::new(LabState::default());
    let board_ref = NodeRef::<leptos::html::Div>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let host = SurfaceHost {
        engine: Rc::new(RefCell::new(None)),
        frames: SharedFrameScheduler::default(),
        board_ref,
        content_ref,
        lab,
    };

    #[cfg(feature = "csr")]
    {
        let host = host.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if host.engine.borrow().is_some() {
                return;
            }
            let mut engine = match Engine::new(canvas) {
                Ok(engine) => engine,
                Err(e) => {
                    log::error!("lab surface unavailable: {e:?}");
                    return;
                }
            };
            let actions = board_size(host.board_ref)
                .map(|(width, height)| engine.set_viewport(width, height))
                .unwrap_or_default();
            let mode = engine.mode();
            lab.set(LabState {
                notes: engine.notes().iter().map(note_view).collect(),
                drawing: mode.drawing,
                erase: mode.erase,
            });
            let transform = engine.view().css_transform();
            *host.engine.borrow_mut() = Some(engine);
            apply_transform(host.content_ref, &transform);
            host.process_actions(actions);
            log::info!("lab surface mounted");
        });
    }

    #[cfg(feature = "csr")]
    {
        let handles = vec![
            window_event_listener(leptos::ev::pointermove, {
                let host = host.clone();
                move |ev: web_sys::PointerEvent| {
                    let Some(board) = host.board_ref.get_untracked() else {
                        return;
                    };
                    let point = pointer_point(&ev, &board);
                    host.dispatch(|engine| engine.on_pointer_move(point));
                }
            }),
            window_event_listener(leptos::ev::pointerup, {
                let host = host.clone();
                move |_ev: web_sys::PointerEvent| host.dispatch(Engine::on_pointer_up)
            }),
            window_event_listener(leptos::ev::pointercancel, {
                let host = host.clone();
                move |_ev: web_sys::PointerEvent| host.dispatch(Engine::on_pointer_cancel)
            }),
            window_event_listener(leptos::ev::keydown, {
                let host = host.clone();
                move |ev: web_sys::KeyboardEvent| {
                    let key = map_key(&ev);
                    if key.is_pan_key() {
                        ev.prevent_default();
                    }
                    host.dispatch(|engine| engine.on_key_down(&key));
                }
            }),
            window_event_listener(leptos::ev::keyup, {
                let host = host.clone();
                move |ev: web_sys::KeyboardEvent| {
                    let key = map_key(&ev);
                    host.dispatch(|engine| engine.on_key_up(&key));
                }
            }),
            window_event_listener(leptos::ev::resize, {
                let host = host.clone();
                move |_ev: web_sys::UiEvent| host.sync_viewport()
            }),
        ];
        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let host = host.clone();
            move |ev: leptos::ev::PointerEvent| {
                let Some(board) = host.board_ref.get_untracked() else {
                    return;
                };
                let Some(drawing) = host.with_engine(|engine| engine.mode().drawing) else {
                    return;
                };
                let target = resolve_target(drawing, probe_target(ev.target()));
                if target != PointerTarget::Control {
                    ev.prevent_default();
                }
                let point = pointer_point(&ev, &board);
                let button = map_button(ev.button());
                host.dispatch(|engine| engine.on_pointer_down(point, button, target));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let host = host.clone();
            move |ev: leptos::ev::WheelEvent| {
                // Ctrl+wheel stays with the browser.
                if ev.ctrl_key() {
                    return;
                }
                ev.prevent_default();
                let Some(board) = host.board_ref.get_untracked() else {
                    return;
                };
                let point = wheel_point(&ev, &board);
                let delta = wheel_delta(&ev, f64::from(board.client_height()));
                let modifiers = map_modifiers(ev.ctrl_key());
                host.dispatch(|engine| engine.on_wheel(point, delta, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_add_note = {
        #[cfg(feature = "csr")]
        {
            let host = host.clone();
            move || host.dispatch(|engine| vec![engine.add_note()])
        }
        #[cfg(not(feature = "csr"))]
        {
            || {}
        }
    };

    let on_toggle_drawing = {
        #[cfg(feature = "csr")]
        {
            let host = host.clone();
            move || host.dispatch(Engine::toggle_drawing)
        }
        #[cfg(not(feature = "csr"))]
        {
            || {}
        }
    };

    let on_toggle_erase = {
        #[cfg(feature = "csr")]
        {
            move || host.dispatch(|engine| vec![engine.toggle_erase()])
        }
        #[cfg(not(feature = "csr"))]
        {
            || {}
        }
    };

    let overlay_class = move || {
        if lab.with(|state| state.drawing) { "ink-overlay ink-overlay--active" } else { "ink-overlay" }
    };
    let content_style = format!("width: {CONTENT_SIZE_PX}px; height: {CONTENT_SIZE_PX}px;");

    view! {
        <div class="lab">
            <LabToolbar
                lab=lab
                on_add_note=on_add_note
                on_toggle_drawing=on_toggle_drawing
                on_toggle_erase=on_toggle_erase
            />
            <div
                class=move || lab.with(LabState::board_class)
                node_ref=board_ref
                on:pointerdown=on_pointer_down
                on:wheel=on_wheel
            >
                <div class="lab-content" node_ref=content_ref style=content_style>
                    <For
                        each=move || lab.with(|state| state.notes.clone())
                        key=|note| note.id.clone()
                        children=move |note: NoteView| view! { <StickyNote note=note/> }
                    />
                </div>
                <canvas class=overlay_class node_ref=canvas_ref></canvas>
            </div>
        </div>
    }
}
