#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::obstacle::RectObstacle;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> Obstacle {
    Obstacle::Rect(RectObstacle { x, y, width, height })
}

/// A full-height wall between the markers.
fn wall() -> Obstacle {
    rect(200.0, 0.0, 100.0, 500.0)
}

/// A core with a known board instead of a generated one.
fn core_with(obstacles: Vec<Obstacle>) -> EngineCore {
    let mut core = EngineCore::new(11).unwrap();
    core.load_layout(obstacles);
    core
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_starts_idle() {
    let core = EngineCore::new(1).unwrap();
    assert_eq!(core.status(), Status::Idle);
    assert!(core.path().is_empty());
    assert!(core.notice().is_none());
    assert_eq!(core.obstacles().len(), 8);
}

// =============================================================
// Pointer-down
// =============================================================

#[test]
fn down_on_the_marker_captures_then_renders() {
    let mut core = core_with(Vec::new());
    let actions = core.on_pointer_down(pt(80.0, 420.0));
    assert_eq!(actions, vec![Action::CapturePointer, Action::RenderNeeded]);
    assert_eq!(core.status(), Status::Drawing);
}

#[test]
fn down_away_from_the_marker_is_inert() {
    let mut core = core_with(Vec::new());
    assert!(core.on_pointer_down(pt(400.0, 250.0)).is_empty());
    assert_eq!(core.status(), Status::Idle);
}

// =============================================================
// Pointer-move
// =============================================================

#[test]
fn move_while_idle_is_inert() {
    let mut core = core_with(Vec::new());
    assert!(core.on_pointer_move(pt(300.0, 300.0)).is_empty());
}

#[test]
fn move_while_drawing_requests_a_render() {
    let mut core = core_with(Vec::new());
    core.on_pointer_down(pt(80.0, 420.0));
    let actions = core.on_pointer_move(pt(300.0, 300.0));
    assert_eq!(actions, vec![Action::RenderNeeded]);
}

#[test]
fn move_into_an_obstacle_renders_then_releases() {
    let mut core = core_with(vec![wall()]);
    core.on_pointer_down(pt(80.0, 420.0));
    let actions = core.on_pointer_move(pt(400.0, 420.0));
    assert_eq!(actions, vec![Action::RenderNeeded, Action::ReleasePointer]);
    assert_eq!(core.status(), Status::Hit);
}

#[test]
fn move_onto_the_goal_renders_then_releases() {
    let mut core = core_with(Vec::new());
    core.on_pointer_down(pt(80.0, 420.0));
    let actions = core.on_pointer_move(pt(720.0, 80.0));
    assert_eq!(actions, vec![Action::RenderNeeded, Action::ReleasePointer]);
    assert_eq!(core.status(), Status::Won);
}

#[test]
fn terminal_states_ignore_further_input() {
    let mut core = core_with(vec![wall()]);
    core.on_pointer_down(pt(80.0, 420.0));
    core.on_pointer_move(pt(400.0, 420.0));
    assert!(core.on_pointer_move(pt(500.0, 100.0)).is_empty());
    assert!(core.on_pointer_down(pt(80.0, 420.0)).is_empty());
    assert!(core.on_pointer_up().is_empty());
    assert_eq!(core.status(), Status::Hit);
}

// =============================================================
// Pointer-up
// =============================================================

#[test]
fn up_ends_the_stroke_with_a_release() {
    let mut core = core_with(Vec::new());
    core.on_pointer_down(pt(80.0, 420.0));
    let actions = core.on_pointer_up();
    assert_eq!(actions, vec![Action::ReleasePointer]);
    assert_eq!(core.status(), Status::Idle);
}

#[test]
fn up_while_idle_is_inert() {
    let mut core = core_with(Vec::new());
    assert!(core.on_pointer_up().is_empty());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_requests_a_render_and_deals_a_full_board() {
    let mut core = core_with(vec![wall()]);
    core.on_pointer_down(pt(80.0, 420.0));
    core.on_pointer_move(pt(400.0, 420.0));
    let actions = core.reset().unwrap();
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.status(), Status::Idle);
    assert!(core.path().is_empty());
    assert_eq!(core.obstacles().len(), 8);
}

// =============================================================
// Layout exchange
// =============================================================

#[test]
fn layout_round_trips_as_json() {
    let board = vec![wall(), rect(500.0, 100.0, 120.0, 40.0)];
    let core = core_with(board.clone());
    let json = core.layout_json().unwrap();
    assert!(json.contains(r#""type":"rect""#));

    let mut other = EngineCore::new(99).unwrap();
    other.load_layout_json(&json).unwrap();
    assert_eq!(other.obstacles(), board.as_slice());
    assert_eq!(other.status(), Status::Idle);
}

#[test]
fn load_layout_json_rejects_garbage() {
    let mut core = core_with(vec![wall()]);
    assert!(core.load_layout_json("not a layout").is_err());
    assert_eq!(core.obstacles(), &[wall()]);
}
