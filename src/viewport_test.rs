#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point basics ---

#[test]
fn point_new() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn point_clone_and_equality() {
    let p = Point::new(1.0, 2.0);
    let q = p.clone();
    assert_eq!(p, q);
    assert_ne!(p, Point::new(1.0, 2.5));
}

// --- Viewport construction ---

#[test]
fn default_viewport_matches_logical_size() {
    let vp = Viewport::default();
    assert_eq!(vp.width, 800.0);
    assert_eq!(vp.height, 500.0);
}

#[test]
fn new_keeps_positive_sizes() {
    let vp = Viewport::new(400.0, 250.0);
    assert_eq!(vp.width, 400.0);
    assert_eq!(vp.height, 250.0);
}

#[test]
fn new_clamps_degenerate_sizes() {
    let vp = Viewport::new(0.0, -5.0);
    assert_eq!(vp.width, 1.0);
    assert_eq!(vp.height, 1.0);
}

// --- CSS to logical conversion ---

#[test]
fn to_logical_is_identity_at_natural_size() {
    let vp = Viewport::default();
    let p = vp.to_logical(Point::new(123.0, 456.0));
    assert!(point_approx_eq(p, Point::new(123.0, 456.0)));
}

#[test]
fn to_logical_scales_a_shrunk_element() {
    // Element rendered at half size in both axes.
    let vp = Viewport::new(400.0, 250.0);
    let p = vp.to_logical(Point::new(200.0, 125.0));
    assert!(point_approx_eq(p, Point::new(400.0, 250.0)));
}

#[test]
fn to_logical_scales_each_axis_independently() {
    // Stretched wide, squashed tall.
    let vp = Viewport::new(1600.0, 125.0);
    let p = vp.to_logical(Point::new(800.0, 125.0));
    assert!(point_approx_eq(p, Point::new(400.0, 500.0)));
}

#[test]
fn to_logical_maps_origin_to_origin() {
    let vp = Viewport::new(977.0, 311.0);
    let p = vp.to_logical(Point::new(0.0, 0.0));
    assert!(point_approx_eq(p, Point::new(0.0, 0.0)));
}

#[test]
fn to_logical_maps_element_corner_to_logical_corner() {
    let vp = Viewport::new(977.0, 311.0);
    let p = vp.to_logical(Point::new(977.0, 311.0));
    assert!(point_approx_eq(p, Point::new(800.0, 500.0)));
}
