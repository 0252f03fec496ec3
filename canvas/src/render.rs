//! Browser ink surface: paints ink segments into the overlay's 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! [`crate::ink::InkCapture`] logs them and keeps going.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Point;
use crate::raster::{Composite, InkSurface, Pen};

/// The ink overlay canvas and its 2D context.
#[derive(Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to `canvas`, acquiring its 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        apply_line_style(&ctx);
        Ok(Self { canvas, ctx })
    }
}

impl InkSurface for CanvasSurface {
    type Error = JsValue;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        // Assigning either dimension resets the backing store and every context setting.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        apply_line_style(&self.ctx);
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point, pen: Pen) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_global_composite_operation(pen.composite.css_name())?;
        ctx.set_line_width(pen.width);
        if pen.composite == Composite::SourceOver {
            let [r, g, b] = pen.rgb;
            ctx.set_stroke_style_str(&format!("#{r:02x}{g:02x}{b:02x}"));
        }
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        Ok(())
    }
}

fn apply_line_style(ctx: &CanvasRenderingContext2d) {
    ctx.set_image_smoothing_enabled(true);
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
}
