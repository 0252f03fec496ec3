#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn view(scale: f64, tx: f64, ty: f64) -> ViewState {
    ViewState { scale, translate_x: tx, translate_y: ty }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Defaults ---

#[test]
fn view_default_is_identity() {
    let v = ViewState::default();
    assert_eq!(v.scale, 1.0);
    assert_eq!(v.translate_x, 0.0);
    assert_eq!(v.translate_y, 0.0);
}

// --- Conversions ---

#[test]
fn screen_to_content_identity() {
    let v = ViewState::default();
    assert!(point_approx_eq(v.screen_to_content(Point::new(50.0, 75.0)), Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_content_with_scale_and_translate() {
    let v = view(2.0, 100.0, 50.0);
    let content = v.screen_to_content(Point::new(300.0, 250.0));
    assert!(point_approx_eq(content, Point::new(100.0, 100.0)));
}

#[test]
fn content_to_screen_inverts_screen_to_content() {
    let v = view(0.75, -40.0, 12.5);
    let screen = Point::new(123.0, -9.0);
    let back = v.content_to_screen(v.screen_to_content(screen));
    assert!(point_approx_eq(back, screen));
}

#[test]
fn screen_dist_to_content_divides_by_scale() {
    let v = view(2.0, 0.0, 0.0);
    assert!(approx_eq(v.screen_dist_to_content(10.0), 5.0));
}

// --- Zoom ---

#[test]
fn zoom_in_from_identity_at_pointer() {
    let mut v = ViewState::default();
    assert!(v.zoom_at(Point::new(400.0, 300.0), -100.0));
    assert!(approx_eq(v.scale, 1.1));
    assert!(approx_eq(v.translate_x, -40.0));
    assert!(approx_eq(v.translate_y, -30.0));
}

#[test]
fn zoom_keeps_pointer_content_point_fixed() {
    let mut v = view(1.3, 25.0, -60.0);
    let pointer = Point::new(512.0, 384.0);
    let before = v.screen_to_content(pointer);
    v.zoom_at(pointer, 240.0);
    let after = v.screen_to_content(pointer);
    assert!(point_approx_eq(before, after));
}

#[test]
fn zoom_anchoring_holds_across_a_sequence() {
    let mut v = ViewState::default();
    let pointer = Point::new(80.0, 620.0);
    let before = v.screen_to_content(pointer);
    for delta in [-50.0, -120.0, 30.0, -5.0, 400.0] {
        v.zoom_at(pointer, delta);
        assert!(point_approx_eq(v.screen_to_content(pointer), before));
    }
}

#[test]
fn zoom_clamps_at_max() {
    let mut v = ViewState::default();
    for _ in 0..100 {
        v.zoom_at(Point::new(10.0, 10.0), -500.0);
    }
    assert_eq!(v.scale, MAX_SCALE);
}

#[test]
fn zoom_clamps_at_min() {
    let mut v = ViewState::default();
    for _ in 0..100 {
        v.zoom_at(Point::new(10.0, 10.0), 500.0);
    }
    assert_eq!(v.scale, MIN_SCALE);
}

#[test]
fn zoom_huge_positive_delta_clamps_to_min() {
    // 1 - 5000 * 0.001 is negative; the clamp still lands on the lower bound.
    let mut v = ViewState::default();
    v.zoom_at(Point::new(0.0, 0.0), 5000.0);
    assert_eq!(v.scale, MIN_SCALE);
}

#[test]
fn zoom_at_bound_leaves_translate_unchanged() {
    let mut v = view(MAX_SCALE, 17.0, -3.0);
    v.zoom_at(Point::new(200.0, 200.0), -100.0);
    assert_eq!(v.scale, MAX_SCALE);
    assert!(approx_eq(v.translate_x, 17.0));
    assert!(approx_eq(v.translate_y, -3.0));
}

#[test]
fn zoom_rejects_non_finite_delta() {
    let mut v = view(1.5, 3.0, 4.0);
    assert!(!v.zoom_at(Point::new(1.0, 1.0), f64::NAN));
    assert!(!v.zoom_at(Point::new(1.0, 1.0), f64::INFINITY));
    assert_eq!(v, view(1.5, 3.0, 4.0));
}

#[test]
fn zoom_stays_in_bounds_for_mixed_sequence() {
    let mut v = ViewState::default();
    let deltas = [-900.0, 1200.0, -3.0, 0.0, 850.0, -10_000.0, 42.0, 999.0, -1.0];
    for (i, delta) in deltas.iter().cycle().take(200).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let pointer = Point::new(i as f64 * 3.0, 700.0 - i as f64);
        v.zoom_at(pointer, *delta);
        assert!(v.scale >= MIN_SCALE && v.scale <= MAX_SCALE, "scale {} out of bounds", v.scale);
    }
}

// --- Pan ---

#[test]
fn pan_adds_raw_screen_delta_regardless_of_scale() {
    let mut v = view(2.5, 10.0, 10.0);
    v.pan_by(15.0, -4.0);
    assert!(approx_eq(v.translate_x, 25.0));
    assert!(approx_eq(v.translate_y, 6.0));
    assert_eq!(v.scale, 2.5);
}

// --- clamp_scale / css ---

#[test]
fn clamp_scale_handles_nan() {
    assert_eq!(clamp_scale(f64::NAN), MIN_SCALE);
    assert_eq!(clamp_scale(1.7), 1.7);
    assert_eq!(clamp_scale(-2.0), MIN_SCALE);
    assert_eq!(clamp_scale(9.0), MAX_SCALE);
}

#[test]
fn css_transform_formats_translate_then_scale() {
    let v = view(1.5, -40.0, 12.0);
    assert_eq!(v.css_transform(), "translate(-40px, 12px) scale(1.5)");
}
