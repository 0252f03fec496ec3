//! Whiteboard surface engine for the TrackLab lab page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction model of the lab whiteboard: translating raw pointer, wheel and
//! keyboard input into view-transform changes, sticky-note moves and freehand
//! ink. The host UI layer is responsible only for wiring DOM events to the
//! engine, scheduling animation frames, and re-rendering notes from the
//! [`engine::Action`]s it receives.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`notes`] | Sticky-note model and its in-memory store |
//! | [`camera`] | Pan/zoom view state and coordinate conversions |
//! | [`frame`] | Cancel-and-replace animation-frame slot |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Pointer-target arbitration |
//! | [`ink`] | Freehand stroke capture |
//! | [`raster`] | Ink surface trait and the in-memory pixel buffer |
//! | [`render`] | Browser ink surface backed by a 2D canvas context |
//! | [`consts`] | Shared numeric constants (zoom limits, pen widths, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod frame;
pub mod hit;
pub mod ink;
pub mod input;
pub mod notes;
pub mod raster;
pub mod render;
