//! Networking for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/register calls and `types` defines their JSON
//! bodies and the token claims.

pub mod api;
pub mod types;
