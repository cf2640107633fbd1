//! Rendering: draws a full frame of the board to the 2D context.
//!
//! This module is the only place that touches [`CanvasRenderingContext2d`].
//! It reads session state and produces pixels; it never mutates application
//! state. Layers draw back to front: obstacles, then the markers, then the
//! stroke, so the stroke always stays visible.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! [`crate::engine::Engine::render`] is the top-level caller.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GOAL, GOAL_RADIUS, LOGICAL_H, LOGICAL_W, START, START_RADIUS};
use crate::obstacle::{CircleObstacle, Obstacle, RectObstacle};
use crate::session::Status;
use crate::viewport::Point;

// ── Palette ─────────────────────────────────────────────────────────────

/// Obstacle fill.
const OBSTACLE_FILL: &str = "#f05d5e";
/// Obstacle outline.
const OBSTACLE_STROKE: &str = "#444";
/// Start marker fill.
const START_FILL: &str = "#00875a";
/// Goal marker fill.
const GOAL_FILL: &str = "#1e3a8a";
/// Marker label color.
const LABEL_FILL: &str = "#fff";
/// Marker label font.
const LABEL_FONT: &str = "bold 14px system-ui";
/// Stroke color while drawing and after a win.
const PATH_STROKE: &str = "#111827";
/// Stroke color after a hit.
const PATH_STROKE_HIT: &str = "#ff2e63";
/// Stroke width in logical units.
const PATH_WIDTH: f64 = 4.0;

/// Draw the frame. Coordinates are logical; the caller keeps the canvas
/// backing store at the logical size.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    status: Status,
    path: &[Point],
    obstacles: &[Obstacle],
) -> Result<(), JsValue> {
    // 1. Clear the previous frame.
    ctx.clear_rect(0.0, 0.0, LOGICAL_W, LOGICAL_H);

    // 2. Obstacles share one fill and outline.
    ctx.set_fill_style_str(OBSTACLE_FILL);
    ctx.set_stroke_style_str(OBSTACLE_STROKE);
    for obstacle in obstacles {
        match obstacle {
            Obstacle::Rect(rect) => draw_rect(ctx, rect),
            Obstacle::Circle(circle) => draw_circle(ctx, circle)?,
        }
    }

    // 3. Markers, labelled A and B.
    draw_marker(ctx, START, START_RADIUS, START_FILL, "A")?;
    draw_marker(ctx, GOAL, GOAL_RADIUS, GOAL_FILL, "B")?;

    // 4. The stroke, once it has at least one segment.
    draw_path(ctx, status, path);

    Ok(())
}

fn draw_rect(ctx: &CanvasRenderingContext2d, rect: &RectObstacle) {
    ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
}

fn draw_circle(ctx: &CanvasRenderingContext2d, circle: &CircleObstacle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.stroke();
    Ok(())
}

fn draw_marker(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    fill: &str,
    label: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(fill);
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.fill();

    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(label, center.x, center.y)?;
    Ok(())
}

/// The stroke keeps rendering after the session ends; a hit recolors it.
fn draw_path(ctx: &CanvasRenderingContext2d, status: Status, path: &[Point]) {
    if path.len() < 2 {
        return;
    }

    let stroke = if status == Status::Hit { PATH_STROKE_HIT } else { PATH_STROKE };
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(PATH_WIDTH);
    ctx.begin_path();
    ctx.move_to(path[0].x, path[0].y);
    for p in &path[1..] {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
}
