#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::obstacle::{CircleObstacle, Obstacle, RectObstacle};
use crate::viewport::Point;

/// Cross products smaller than this count as collinear.
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    Counterclockwise,
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Whether `p` lies inside `rect`, boundary inclusive.
#[must_use]
pub fn point_in_rect(p: Point, rect: RectObstacle) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val.abs() < COLLINEAR_EPSILON {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Counterclockwise
    }
}

/// Whether `b` falls inside the bounding box of `a` and `c`. Only meaningful
/// once the three points are known to be collinear.
fn on_segment(a: Point, b: Point, c: Point) -> bool {
    a.x.min(c.x) <= b.x && b.x <= a.x.max(c.x) && a.y.min(c.y) <= b.y && b.y <= a.y.max(c.y)
}

/// Whether segment `p1`-`p2` intersects segment `q1`-`q2`. Touching at a
/// single point counts, as do collinear overlaps.
#[must_use]
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, q1, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, p2))
        || (o3 == Orientation::Collinear && on_segment(q1, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(q1, p2, q2))
}

/// Whether segment `p1`-`p2` touches `rect`. The rectangle is solid: a
/// segment fully inside it hits even though it crosses no edge.
#[must_use]
pub fn segment_intersects_rect(p1: Point, p2: Point, rect: RectObstacle) -> bool {
    if point_in_rect(p1, rect) || point_in_rect(p2, rect) {
        return true;
    }

    let tl = Point::new(rect.x, rect.y);
    let tr = Point::new(rect.x + rect.width, rect.y);
    let br = Point::new(rect.x + rect.width, rect.y + rect.height);
    let bl = Point::new(rect.x, rect.y + rect.height);

    let edges = [(tl, tr), (tr, br), (br, bl), (bl, tl)];
    edges.iter().any(|&(e1, e2)| segments_intersect(p1, p2, e1, e2))
}

/// Whether segment `p1`-`p2` passes within `circle.radius` of its center,
/// boundary inclusive. Projects the center onto the segment and clamps the
/// projection to the segment's extent.
#[must_use]
pub fn segment_intersects_circle(p1: Point, p2: Point, circle: CircleObstacle) -> bool {
    let vx = p2.x - p1.x;
    let vy = p2.y - p1.y;
    let wx = circle.center.x - p1.x;
    let wy = circle.center.y - p1.y;

    // A zero-length segment degenerates to a point test against p1.
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 {
        ((wx * vx + wy * vy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let closest = Point::new(p1.x + t * vx, p1.y + t * vy);
    distance(closest, circle.center) <= circle.radius
}

/// Whether segment `p1`-`p2` crosses `obstacle`.
#[must_use]
pub fn segment_hits_obstacle(p1: Point, p2: Point, obstacle: Obstacle) -> bool {
    match obstacle {
        Obstacle::Rect(rect) => segment_intersects_rect(p1, p2, rect),
        Obstacle::Circle(circle) => segment_intersects_circle(p1, p2, circle),
    }
}
