#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_RATE};

/// A point in either screen or content space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state of the whiteboard content layer.
///
/// `translate_x` / `translate_y` are in CSS pixels.
/// `scale` is a zoom factor (1.0 = no zoom), always within `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl ViewState {
    /// Convert a screen-space point (CSS pixels) to content coordinates.
    #[must_use]
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.translate_x) / self.scale,
            y: (screen.y - self.translate_y) / self.scale,
        }
    }

    /// Convert a content-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn content_to_screen(&self, content: Point) -> Point {
        Point {
            x: content.x * self.scale + self.translate_x,
            y: content.y * self.scale + self.translate_y,
        }
    }

    /// Convert a screen-space distance (pixels) to content-space distance.
    #[must_use]
    pub fn screen_dist_to_content(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Zoom by a wheel delta, keeping the content point under `pointer` fixed.
    ///
    /// Returns `false` and leaves the view untouched when the delta is not finite.
    pub fn zoom_at(&mut self, pointer: Point, delta_y: f64) -> bool {
        if !delta_y.is_finite() {
            return false;
        }
        let new_scale = clamp_scale(self.scale * (1.0 - delta_y * WHEEL_ZOOM_RATE));
        let factor = new_scale / self.scale;
        self.translate_x = pointer.x - (pointer.x - self.translate_x) * factor;
        self.translate_y = pointer.y - (pointer.y - self.translate_y) * factor;
        self.scale = new_scale;
        true
    }

    /// Shift the content by a raw screen-space delta. Pan speed ignores `scale`.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    /// CSS `transform` value for the content layer (origin top-left).
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.translate_x, self.translate_y, self.scale)
    }
}

/// Clamp a scale into `[MIN_SCALE, MAX_SCALE]`. NaN falls back to the lower bound.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
