//! Freehand stroke capture onto the ink overlay.
//!
//! `InkCapture` is a two-state machine: idle, or stroking with a remembered
//! pen position. A pointer-down starts a path, each move paints one segment
//! from the remembered position and advances it, and a pointer-up anywhere
//! ends the path. Positions are overlay-local screen pixels; the overlay does
//! not follow the view transform, so panning or zooming never moves ink.

#[cfg(test)]
#[path = "ink_test.rs"]
mod ink_test;

use crate::camera::Point;
use crate::raster::{InkSurface, Pen};

/// Stroke state plus the surface strokes are painted into.
#[derive(Debug)]
pub struct InkCapture<S> {
    surface: S,
    pen_at: Option<Point>,
}

impl<S: InkSurface> InkCapture<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { surface, pen_at: None }
    }

    /// Start a new path at `at`. Any unfinished path is dropped.
    pub fn begin(&mut self, at: Point) {
        self.pen_at = Some(at);
    }

    /// Extend the current path to `to`, painting the new segment with `pen`.
    ///
    /// Returns `false` without painting when no path is in progress.
    pub fn extend(&mut self, to: Point, pen: Pen) -> bool {
        let Some(from) = self.pen_at else {
            return false;
        };
        if let Err(err) = self.surface.stroke_segment(from, to, pen) {
            log::warn!("ink segment failed: {err:?}");
        }
        self.pen_at = Some(to);
        true
    }

    /// Finish the current path, if any.
    pub fn end(&mut self) {
        self.pen_at = None;
    }

    /// Resize the surface to the viewport. Clears all ink and cancels any path in progress.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pen_at = None;
        if let Err(err) = self.surface.resize(width, height) {
            log::warn!("ink surface resize to {width}x{height} failed: {err:?}");
        }
    }

    /// Whether a path is in progress.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.pen_at.is_some()
    }

    /// The backing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
