#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn pixel_deltas_pass_through() {
    assert_eq!(wheel_pixels(-100.0, 0, 800.0), -100.0);
}

#[test]
fn line_deltas_scale_by_line_height() {
    assert_eq!(wheel_pixels(3.0, 1, 800.0), 48.0);
}

#[test]
fn page_deltas_scale_by_page_height() {
    assert_eq!(wheel_pixels(-1.0, 2, 640.0), -640.0);
}

#[test]
fn unknown_mode_is_treated_as_pixels() {
    assert_eq!(wheel_pixels(7.0, 9, 640.0), 7.0);
}
