//! Obstacle placement: rejection-sampled scatter of rectangles and circles.
//!
//! Rectangles are placed first, then circles. Each candidate is redrawn until
//! it clears the keep-clear disks around both markers and every obstacle
//! accepted so far. Sampling is bounded so a misconfigured board surfaces as
//! a typed error instead of a hang.

#[cfg(test)]
#[path = "scatter_test.rs"]
mod scatter_test;

use std::fmt;
use std::ops::Range;

use rand::Rng;

use crate::consts::{
    CIRCLE_COUNT, GOAL, GOAL_RADIUS, RECT_COUNT, SAFETY_MARGIN, START, START_RADIUS,
};
use crate::obstacle::{CircleObstacle, Obstacle, RectObstacle};
use crate::viewport::Point;

// ── Sampling ranges (logical coordinates) ───────────────────────────────

/// Rectangle left edge.
pub const RECT_X: Range<f64> = 50.0..650.0;
/// Rectangle top edge.
pub const RECT_Y: Range<f64> = 20.0..420.0;
/// Rectangle width.
pub const RECT_W: Range<f64> = 100.0..160.0;
/// Rectangle height.
pub const RECT_H: Range<f64> = 30.0..50.0;
/// Circle center, horizontal.
pub const CIRCLE_X: Range<f64> = 30.0..730.0;
/// Circle center, vertical.
pub const CIRCLE_Y: Range<f64> = 30.0..430.0;
/// Circle radius.
pub const CIRCLE_R: Range<f64> = 30.0..60.0;

/// Candidate samples allowed per shape quota before placement gives up.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Shape kind named in placement errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect => write!(f, "rectangle"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// Placement failure. With the built-in ranges and quotas this is not
/// reachable in practice; it guards against misconfiguration.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("no admissible {shape} placement within {attempts} attempts")]
    Exhausted { shape: ShapeKind, attempts: usize },
}

/// Scatter a fresh obstacle set with the default attempt budget.
///
/// # Errors
///
/// Returns [`PlacementError::Exhausted`] if a shape quota cannot be met.
pub fn generate(rng: &mut impl Rng) -> Result<Vec<Obstacle>, PlacementError> {
    generate_with_budget(rng, MAX_ATTEMPTS)
}

/// Scatter a fresh obstacle set with an explicit per-quota attempt budget.
///
/// # Errors
///
/// Returns [`PlacementError::Exhausted`] if a shape quota cannot be met
/// within `budget` samples.
pub fn generate_with_budget(
    rng: &mut impl Rng,
    budget: usize,
) -> Result<Vec<Obstacle>, PlacementError> {
    let mut obstacles = Vec::with_capacity(RECT_COUNT + CIRCLE_COUNT);
    fill_quota(rng, &mut obstacles, ShapeKind::Rect, RECT_COUNT, budget)?;
    fill_quota(rng, &mut obstacles, ShapeKind::Circle, CIRCLE_COUNT, budget)?;
    Ok(obstacles)
}

fn fill_quota(
    rng: &mut impl Rng,
    accepted: &mut Vec<Obstacle>,
    shape: ShapeKind,
    quota: usize,
    budget: usize,
) -> Result<(), PlacementError> {
    let mut placed = 0;
    let mut attempts = 0;
    while placed < quota {
        if attempts == budget {
            return Err(PlacementError::Exhausted { shape, attempts });
        }
        attempts += 1;

        let candidate = match shape {
            ShapeKind::Rect => Obstacle::Rect(sample_rect(rng)),
            ShapeKind::Circle => Obstacle::Circle(sample_circle(rng)),
        };
        if admissible(candidate, accepted) {
            accepted.push(candidate);
            placed += 1;
        }
    }
    Ok(())
}

/// Whether a candidate clears both marker keep-clear disks and every
/// already-accepted obstacle.
fn admissible(candidate: Obstacle, accepted: &[Obstacle]) -> bool {
    if candidate.overlaps_disk(START, START_RADIUS + SAFETY_MARGIN)
        || candidate.overlaps_disk(GOAL, GOAL_RADIUS + SAFETY_MARGIN)
    {
        return false;
    }
    accepted.iter().all(|&placed| !candidate.overlaps(placed))
}

fn sample_rect(rng: &mut impl Rng) -> RectObstacle {
    RectObstacle {
        x: rng.random_range(RECT_X),
        y: rng.random_range(RECT_Y),
        width: rng.random_range(RECT_W),
        height: rng.random_range(RECT_H),
    }
}

fn sample_circle(rng: &mut impl Rng) -> CircleObstacle {
    CircleObstacle {
        center: Point::new(rng.random_range(CIRCLE_X), rng.random_range(CIRCLE_Y)),
        radius: rng.random_range(CIRCLE_R),
    }
}
