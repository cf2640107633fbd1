#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LOGICAL_H, LOGICAL_W};

/// A point in logical canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of the canvas element in CSS pixels.
///
/// Pointer events arrive in CSS pixels relative to the element, while the
/// session works in the fixed logical space. CSS layout may stretch the
/// element, so each axis scales independently.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: LOGICAL_W, height: LOGICAL_H }
    }
}

impl Viewport {
    /// Build a viewport from a measured element size. Degenerate sizes
    /// (a hidden or zero-width element) are clamped to one pixel so the
    /// scale factors stay finite.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(1.0), height: height.max(1.0) }
    }

    /// Convert an element-relative CSS-pixel point to logical canvas coordinates.
    #[must_use]
    pub fn to_logical(&self, css: Point) -> Point {
        Point {
            x: css.x * (LOGICAL_W / self.width),
            y: css.y * (LOGICAL_H / self.height),
        }
    }
}
