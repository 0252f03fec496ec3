//! DOM event to engine input mapping.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

#[cfg(feature = "csr")]
use tracklab_canvas::camera::Point as CanvasPoint;
#[cfg(feature = "csr")]
use tracklab_canvas::hit::TargetProbe;
#[cfg(feature = "csr")]
use tracklab_canvas::input::{Button as CanvasButton, Key as CanvasKey, Modifiers as CanvasModifiers, WheelDelta};

/// Elements matching this selector are sticky notes.
pub const NOTE_SELECTOR: &str = ".note";
/// Attribute carrying a note element's id.
pub const NOTE_ID_ATTR: &str = "data-note-id";
/// Elements matching this selector never start a pan.
pub const CONTROL_SELECTOR: &str = "button";

const LINE_HEIGHT_PX: f64 = 16.0;

/// Convert a wheel delta to pixels given its `deltaMode` (0 pixel, 1 line, 2 page).
#[must_use]
pub fn wheel_pixels(delta: f64, delta_mode: u32, page_px: f64) -> f64 {
    match delta_mode {
        1 => delta * LINE_HEIGHT_PX,
        2 => delta * page_px,
        _ => delta,
    }
}

#[cfg(feature = "csr")]
pub fn map_button(button: i16) -> CanvasButton {
    CanvasButton::from_dom(button)
}

#[cfg(feature = "csr")]
pub fn map_modifiers(ctrl: bool) -> CanvasModifiers {
    CanvasModifiers { ctrl }
}

#[cfg(feature = "csr")]
pub fn map_key(ev: &web_sys::KeyboardEvent) -> CanvasKey {
    CanvasKey(ev.code())
}

/// Client coordinates relative to `surface`'s top-left corner.
#[cfg(feature = "csr")]
pub fn surface_point(client_x: i32, client_y: i32, surface: &web_sys::Element) -> CanvasPoint {
    let rect = surface.get_bounding_client_rect();
    CanvasPoint::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &web_sys::PointerEvent, surface: &web_sys::Element) -> CanvasPoint {
    surface_point(ev.client_x(), ev.client_y(), surface)
}

#[cfg(feature = "csr")]
pub fn wheel_point(ev: &web_sys::WheelEvent, surface: &web_sys::Element) -> CanvasPoint {
    surface_point(ev.client_x(), ev.client_y(), surface)
}

#[cfg(feature = "csr")]
pub fn wheel_delta(ev: &web_sys::WheelEvent, page_px: f64) -> WheelDelta {
    WheelDelta { dy: wheel_pixels(ev.delta_y(), ev.delta_mode(), page_px) }
}

/// Gather what arbitration needs to know about the element under the pointer.
#[cfg(feature = "csr")]
pub fn probe_target(target: Option<web_sys::EventTarget>) -> TargetProbe {
    use wasm_bindgen::JsCast;

    let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return TargetProbe::default();
    };
    let note_id = element
        .closest(NOTE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|note| note.get_attribute(NOTE_ID_ATTR));
    let in_control = element.closest(CONTROL_SELECTOR).ok().flatten().is_some();
    TargetProbe { note_id, in_control }
}
