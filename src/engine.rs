use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::obstacle::Obstacle;
use crate::render;
use crate::scatter::PlacementError;
use crate::session::{Notice, Session, Status};
use crate::viewport::Point;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Host effects requested by the core. The boot layer executes them against
/// the DOM; tests assert on them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The frame is stale and must be redrawn.
    RenderNeeded,
    /// Route subsequent pointer events to the canvas element.
    CapturePointer,
    /// Release a previously captured pointer.
    ReleasePointer,
}

/// The browser-free half of the engine: wraps the session and translates
/// its transitions into host effects. Kept separate from [`Engine`] so the
/// whole input lifecycle is testable natively.
pub struct EngineCore {
    session: Session,
}

impl EngineCore {
    /// Create a core with a freshly scattered board.
    ///
    /// # Errors
    ///
    /// Propagates a placement fault from the generator.
    pub fn new(seed: u64) -> Result<Self, PlacementError> {
        Ok(Self { session: Session::new(seed)? })
    }

    // --- Input events ---

    /// Pointer-down at a logical point. Capturing the pointer keeps the
    /// stroke alive when it leaves the element mid-draw.
    pub fn on_pointer_down(&mut self, p: Point) -> Vec<Action> {
        let before = self.session.status();
        let after = self.session.on_down(p);
        if before == Status::Idle && after == Status::Drawing {
            vec![Action::CapturePointer, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer-move at a logical point. A terminal transition releases the
    /// capture immediately rather than waiting for the pointer-up.
    pub fn on_pointer_move(&mut self, p: Point) -> Vec<Action> {
        if self.session.status() != Status::Drawing {
            return Vec::new();
        }
        let after = self.session.on_move(p);
        let mut actions = vec![Action::RenderNeeded];
        if matches!(after, Status::Hit | Status::Won) {
            actions.push(Action::ReleasePointer);
        }
        actions
    }

    /// Pointer-up. Ends a stroke in progress.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let ended = self.session.status() == Status::Drawing;
        self.session.on_up();
        if ended {
            vec![Action::ReleasePointer]
        } else {
            Vec::new()
        }
    }

    /// Rescatter the board and clear the stroke.
    ///
    /// # Errors
    ///
    /// On a placement fault the previous board stays and nothing needs
    /// redrawing.
    pub fn reset(&mut self) -> Result<Vec<Action>, PlacementError> {
        self.session.reset()?;
        Ok(vec![Action::RenderNeeded])
    }

    // --- Queries ---

    #[must_use]
    pub fn status(&self) -> Status {
        self.session.status()
    }

    #[must_use]
    pub fn path(&self) -> &[Point] {
        self.session.path()
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        self.session.obstacles()
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.session.notice()
    }

    // --- Layout exchange ---

    /// The current board as a JSON array of obstacles.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn layout_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.session.obstacles())
    }

    /// Replace the board from a JSON array of obstacles and clear the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if `json` is not a valid layout; the
    /// session is left untouched in that case.
    pub fn load_layout_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let obstacles: Vec<Obstacle> = serde_json::from_str(json)?;
        self.session.load_layout(obstacles);
        Ok(())
    }

    /// Replace the board with an already-parsed layout.
    pub fn load_layout(&mut self, obstacles: Vec<Obstacle>) {
        self.session.load_layout(obstacles);
    }
}

/// The full engine: the core plus the canvas element it draws to.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to a canvas element.
    ///
    /// # Errors
    ///
    /// Propagates a placement fault from the generator.
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, PlacementError> {
        Ok(Self { canvas, core: EngineCore::new(seed)? })
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, p: Point) -> Vec<Action> {
        self.core.on_pointer_down(p)
    }

    pub fn on_pointer_move(&mut self, p: Point) -> Vec<Action> {
        self.core.on_pointer_move(p)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    /// Rescatter the board and clear the stroke.
    ///
    /// # Errors
    ///
    /// Propagates a placement fault from the generator.
    pub fn reset(&mut self) -> Result<Vec<Action>, PlacementError> {
        self.core.reset()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the `2d` context is unavailable or a `Canvas2D`
    /// call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, self.core.status(), self.core.path(), self.core.obstacles())
    }
}
