//! Ink raster: the pen model, the surface trait, and an in-memory pixel buffer.
//!
//! Ink is never retained as vector strokes. Each pointer move paints one
//! segment straight into a surface and forgets it; erasing removes alpha from
//! whatever pixels are already there. [`InkSurface`] is the seam between the
//! engine and the pixels: the browser uses [`crate::render::CanvasSurface`],
//! while tests and headless hosts use [`PixelBuffer`].

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::convert::Infallible;

use crate::camera::Point;
use crate::consts::{ERASE_WIDTH_PX, INK_RGB, INK_WIDTH_PX};

/// How a pen's coverage combines with existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Paint over existing content (`source-over`).
    SourceOver,
    /// Remove existing content, revealing transparency (`destination-out`).
    DestinationOut,
}

impl Composite {
    /// The canvas `globalCompositeOperation` name for this mode.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::DestinationOut => "destination-out",
        }
    }
}

/// Stroke parameters for one painted segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Line width in overlay pixels. Caps and joins are round.
    pub width: f64,
    /// RGB colour; irrelevant for erasing.
    pub rgb: [u8; 3],
    /// Compositing mode.
    pub composite: Composite,
}

impl Pen {
    /// The fixed ink pen.
    #[must_use]
    pub fn ink() -> Self {
        Self { width: INK_WIDTH_PX, rgb: INK_RGB, composite: Composite::SourceOver }
    }

    /// The fixed eraser.
    #[must_use]
    pub fn eraser() -> Self {
        Self { width: ERASE_WIDTH_PX, rgb: INK_RGB, composite: Composite::DestinationOut }
    }

    /// Pick the pen for the current erase toggle.
    #[must_use]
    pub fn for_erase_mode(erase: bool) -> Self {
        if erase { Self::eraser() } else { Self::ink() }
    }
}

/// A raster that ink segments can be painted into.
pub trait InkSurface {
    /// Error raised by the backing surface.
    type Error: std::fmt::Debug;

    /// Resize the surface. Always discards existing pixels, even when the size is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the surface cannot be resized.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Paint a straight segment with round caps from `from` to `to`, in surface pixels.
    ///
    /// # Errors
    ///
    /// Returns the backend error if painting fails.
    fn stroke_segment(&mut self, from: Point, to: Point, pen: Pen) -> Result<(), Self::Error>;
}

/// Premultiplied RGBA pixel buffer, row-major, initialised to transparent.
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl PixelBuffer {
    /// Create a transparent buffer of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let count = (width as usize) * (height as usize);
        Self { width, height, pixels: vec![[0.0; 4]; count] }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Alpha at `(x, y)`, or `None` out of bounds.
    #[must_use]
    pub fn alpha(&self, x: u32, y: u32) -> Option<f32> {
        self.pixel(x, y).map(|p| p[3])
    }

    /// Number of pixels with any ink left on them.
    #[must_use]
    pub fn inked_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|p| p[3] > 0.0).count()
    }

    /// Whether the buffer holds no ink at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.inked_pixel_count() == 0
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn paint_capsule(&mut self, from: Point, to: Point, pen: Pen) {
        if self.width == 0 || self.height == 0 || !pen.width.is_finite() || pen.width <= 0.0 {
            return;
        }
        let half = pen.width * 0.5;
        let reach = half + 1.0;
        let min_x = (from.x.min(to.x) - reach).floor().max(0.0);
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0);
        let max_x = (from.x.max(to.x) + reach).ceil().min(f64::from(self.width));
        let max_y = (from.y.max(to.y) + reach).ceil().min(f64::from(self.height));
        if !(min_x < max_x && min_y < max_y) {
            return;
        }

        let src = [
            f32::from(pen.rgb[0]) / 255.0,
            f32::from(pen.rgb[1]) / 255.0,
            f32::from(pen.rgb[2]) / 255.0,
        ];
        let width = self.width as usize;

        for py in (min_y as u32)..(max_y as u32) {
            for px in (min_x as u32)..(max_x as u32) {
                let center = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                let coverage = (half + 0.5 - distance_to_segment(center, from, to)).clamp(0.0, 1.0) as f32;
                if coverage <= 0.0 {
                    continue;
                }
                let dst = &mut self.pixels[(py as usize) * width + (px as usize)];
                let keep = 1.0 - coverage;
                match pen.composite {
                    Composite::SourceOver => {
                        dst[0] = src[0] * coverage + dst[0] * keep;
                        dst[1] = src[1] * coverage + dst[1] * keep;
                        dst[2] = src[2] * coverage + dst[2] * keep;
                        dst[3] = coverage + dst[3] * keep;
                    }
                    Composite::DestinationOut => {
                        for channel in dst.iter_mut() {
                            *channel *= keep;
                        }
                    }
                }
            }
        }
    }
}

impl InkSurface for PixelBuffer {
    type Error = Infallible;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Infallible> {
        *self = Self::new(width, height);
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point, pen: Pen) -> Result<(), Infallible> {
        self.paint_capsule(from, to, pen);
        Ok(())
    }
}

/// Euclidean distance from `p` to the closed segment `a`–`b`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = a.x + abx * t;
    let cy = a.y + aby * t;
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
