//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route guard and form state, and delegates the
//! whiteboard itself to `components`.

pub mod auth_form;
pub mod lab;
pub mod login;
pub mod register;
