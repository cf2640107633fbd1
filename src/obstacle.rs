//! Obstacle model: the shapes scattered across the board, their JSON wire
//! form, and the shape-overlap predicates used during placement.
//!
//! Obstacles serialize with an internal `type` tag so a layout round-trips
//! as plain JSON:
//!
//! ```json
//! [{"type":"rect","x":200.0,"y":120.0,"width":120.0,"height":40.0},
//!  {"type":"circle","center":{"x":400.0,"y":300.0},"radius":45.0}]
//! ```

#[cfg(test)]
#[path = "obstacle_test.rs"]
mod obstacle_test;

use serde::{Deserialize, Serialize};

use crate::hit;
use crate::viewport::Point;

/// An axis-aligned rectangular obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectObstacle {
    /// Left edge in logical coordinates.
    pub x: f64,
    /// Top edge in logical coordinates.
    pub y: f64,
    /// Width, always positive.
    pub width: f64,
    /// Height, always positive.
    pub height: f64,
}

/// A circular obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleObstacle {
    /// Center in logical coordinates.
    pub center: Point,
    /// Radius, always positive.
    pub radius: f64,
}

/// A static obstacle on the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Obstacle {
    Rect(RectObstacle),
    Circle(CircleObstacle),
}

impl Obstacle {
    /// Whether this obstacle is a rectangle.
    #[must_use]
    pub fn is_rect(self) -> bool {
        matches!(self, Self::Rect(_))
    }

    /// Whether this obstacle is a circle.
    #[must_use]
    pub fn is_circle(self) -> bool {
        matches!(self, Self::Circle(_))
    }

    /// Whether this obstacle overlaps `other`. Touching counts as overlap,
    /// so accepted placements keep a visible gap.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        match (self, other) {
            (Self::Rect(a), Self::Rect(b)) => rects_overlap(a, b),
            (Self::Rect(r), Self::Circle(c)) | (Self::Circle(c), Self::Rect(r)) => {
                rect_circle_overlap(r, c)
            }
            (Self::Circle(a), Self::Circle(b)) => circles_overlap(a, b),
        }
    }

    /// Whether this obstacle overlaps the disk around `center`. Used for the
    /// keep-clear zones around the start and goal markers.
    #[must_use]
    pub fn overlaps_disk(self, center: Point, radius: f64) -> bool {
        self.overlaps(Self::Circle(CircleObstacle { center, radius }))
    }
}

/// Interval test on both axes, boundary contact included.
#[must_use]
pub fn rects_overlap(a: RectObstacle, b: RectObstacle) -> bool {
    !(a.x + a.width < b.x
        || b.x + b.width < a.x
        || a.y + a.height < b.y
        || b.y + b.height < a.y)
}

/// Closest-point test between a rectangle and a circle, boundary contact
/// included.
#[must_use]
pub fn rect_circle_overlap(rect: RectObstacle, circle: CircleObstacle) -> bool {
    let closest_x = circle.center.x.clamp(rect.x, rect.x + rect.width);
    let closest_y = circle.center.y.clamp(rect.y, rect.y + rect.height);
    let dx = circle.center.x - closest_x;
    let dy = circle.center.y - closest_y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Center-distance test between two circles, tangency included.
#[must_use]
pub fn circles_overlap(a: CircleObstacle, b: CircleObstacle) -> bool {
    hit::distance(a.center, b.center) <= a.radius + b.radius
}
