//! Shared numeric constants for the puzzle crate.

use crate::viewport::Point;

// ── Canvas ──────────────────────────────────────────────────────

/// Logical canvas width in canvas units.
pub const LOGICAL_W: f64 = 800.0;

/// Logical canvas height in canvas units.
pub const LOGICAL_H: f64 = 500.0;

// ── Markers ─────────────────────────────────────────────────────

/// Center of the start marker (A).
pub const START: Point = Point::new(80.0, 420.0);

/// Center of the goal marker (B).
pub const GOAL: Point = Point::new(720.0, 80.0);

/// Radius of the start marker.
pub const START_RADIUS: f64 = 14.0;

/// Radius of the goal marker.
pub const GOAL_RADIUS: f64 = 14.0;

/// Extra slack beyond the start marker radius for the pointer-down capture test.
pub const START_SLACK: f64 = 4.0;

/// Clearance kept between generated obstacles and either marker.
pub const SAFETY_MARGIN: f64 = 20.0;

// ── Obstacles ───────────────────────────────────────────────────

/// Rectangles per generated obstacle set.
pub const RECT_COUNT: usize = 4;

/// Circles per generated obstacle set.
pub const CIRCLE_COUNT: usize = 4;
