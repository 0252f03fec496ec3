//! Transient notifications shown over every page.
//!
//! `ToastState` is plain data; `show_toast` pushes onto the shared signal and,
//! in the browser, schedules the dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const SIGNED_IN_MESSAGE: &str = "Signed in!";
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created!";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for this kind.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// Show a toast and dismiss it after `timeout_ms`.
pub fn show_toast(toasts: RwSignal<ToastState>, timeout_ms: u32, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        ToastKind::Success => log::info!("toast: {message}"),
        ToastKind::Error => log::warn!("toast: {message}"),
    }
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(timeout_ms, move || {
            toasts.update(|state| {
                state.dismiss(id);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (timeout_ms, id);
    }
}
