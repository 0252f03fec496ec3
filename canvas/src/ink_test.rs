use super::*;
use crate::raster::PixelBuffer;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn capture() -> InkCapture<PixelBuffer> {
    InkCapture::new(PixelBuffer::new(120, 120))
}

#[test]
fn starts_idle() {
    let ink = capture();
    assert!(!ink.is_stroking());
    assert!(ink.surface().is_blank());
}

#[test]
fn extend_without_begin_is_ignored() {
    let mut ink = capture();
    assert!(!ink.extend(pt(10.0, 10.0), Pen::ink()));
    assert!(ink.surface().is_blank());
}

#[test]
fn begin_alone_paints_nothing() {
    let mut ink = capture();
    ink.begin(pt(30.0, 30.0));
    assert!(ink.is_stroking());
    assert!(ink.surface().is_blank());
}

#[test]
fn extend_paints_segment_from_last_point() {
    let mut ink = capture();
    ink.begin(pt(50.0, 50.0));
    assert!(ink.extend(pt(60.0, 60.0), Pen::ink()));
    assert!(ink.surface().alpha(55, 55).unwrap() > 0.9);
}

#[test]
fn path_advances_with_each_move() {
    let mut ink = capture();
    ink.begin(pt(10.0, 10.0));
    ink.extend(pt(10.0, 50.0), Pen::ink());
    ink.extend(pt(80.0, 50.0), Pen::ink());
    assert!(ink.surface().alpha(10, 30).unwrap() > 0.9);
    assert!(ink.surface().alpha(45, 49).unwrap() > 0.9);
    // The diagonal from the first point to the last was never drawn.
    assert_eq!(ink.surface().alpha(45, 30), Some(0.0));
}

#[test]
fn end_stops_painting() {
    let mut ink = capture();
    ink.begin(pt(10.0, 10.0));
    ink.end();
    assert!(!ink.is_stroking());
    assert!(!ink.extend(pt(90.0, 90.0), Pen::ink()));
    assert!(ink.surface().is_blank());
}

#[test]
fn erase_pen_removes_previous_stroke() {
    let mut ink = capture();
    ink.begin(pt(50.0, 50.0));
    ink.extend(pt(60.0, 60.0), Pen::ink());
    ink.end();
    ink.begin(pt(45.0, 45.0));
    ink.extend(pt(65.0, 65.0), Pen::eraser());
    assert!(ink.surface().is_blank());
}

#[test]
fn resize_clears_and_cancels_stroke() {
    let mut ink = capture();
    ink.begin(pt(5.0, 5.0));
    ink.extend(pt(50.0, 50.0), Pen::ink());
    ink.resize(200, 100);
    assert!(!ink.is_stroking());
    assert!(ink.surface().is_blank());
    assert_eq!(ink.surface().width(), 200);
    // The interrupted stroke only resumes after a fresh pointer-down.
    assert!(!ink.extend(pt(60.0, 60.0), Pen::ink()));
    ink.begin(pt(60.0, 60.0));
    assert!(ink.extend(pt(70.0, 60.0), Pen::ink()));
}
