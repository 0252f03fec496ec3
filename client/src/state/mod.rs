//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `lab`) and provided from `App` as
//! `RwSignal` contexts so components depend on small focused models.

pub mod lab;
pub mod session;
pub mod toast;
