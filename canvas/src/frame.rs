//! Animation-frame coalescing for view-transform updates.
//!
//! Wheel and pan input can arrive many times per display refresh. Rather than
//! restyle the content layer on every event, the engine marks the transform
//! dirty and asks the host for a frame. The host cancels any outstanding
//! request and replaces it, so at most one transform application happens per
//! frame no matter how many events arrived in between.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// A single cancel-and-replace deferred slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameSlot {
    pending: bool,
}

impl FrameSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the slot pending. Returns `true` when an earlier request is being replaced.
    pub fn schedule(&mut self) -> bool {
        std::mem::replace(&mut self.pending, true)
    }

    /// Consume the pending request. Returns `false` when nothing was scheduled.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
