//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the lab chrome and interaction surfaces while reading
//! shared state from Leptos context providers.

pub mod lab_surface;
pub mod lab_toolbar;
pub mod sticky_note;
pub mod toast_host;
