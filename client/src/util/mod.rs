//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod canvas_input;
#[cfg(feature = "csr")]
pub mod frame_scheduler;
pub mod jwt;
pub mod token_store;
