//! Session model: the drawing lifecycle from a pointer-down on the start
//! marker to a hit or a win, plus the board state that goes with it.
//!
//! A stroke starts only from [`Status::Idle`] with a pointer-down inside the
//! start marker's capture radius. Every pointer-move extends the stroke by
//! one segment and checks that segment against the board; crossing an
//! obstacle or reaching the goal ends the stroke in a terminal state that
//! only [`Session::reset`] leaves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::consts::{GOAL, GOAL_RADIUS, START, START_RADIUS, START_SLACK};
use crate::hit;
use crate::obstacle::Obstacle;
use crate::scatter::{self, PlacementError};
use crate::viewport::Point;

/// Lifecycle of the drawn stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No stroke in progress. Waiting for a pointer-down on the start marker.
    #[default]
    Idle,
    /// A stroke is being extended. Each new segment is collision-checked.
    Drawing,
    /// The stroke crossed an obstacle. Terminal until reset.
    Hit,
    /// The stroke reached the goal marker. Terminal until reset.
    Won,
}

/// Outcome notice shown to the player after a terminal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Hit,
    Won,
}

impl Notice {
    /// Player-facing message text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Hit => "💥 Game Over! You hit an obstacle.",
            Self::Won => "🎉 Congratulations! You reached B safely.",
        }
    }
}

/// One play session: the stroke, the board, and the outcome.
///
/// Owns the RNG that scatters the board so every reset deals a fresh layout
/// while a fixed seed reproduces the whole run.
pub struct Session {
    status: Status,
    path: Vec<Point>,
    obstacles: Vec<Obstacle>,
    notice: Option<Notice>,
    rng: SmallRng,
}

impl Session {
    /// Create a session with a freshly scattered board.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacementError`] if obstacle placement exhausts its
    /// attempt budget.
    pub fn new(seed: u64) -> Result<Self, PlacementError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let obstacles = scatter::generate(&mut rng)?;
        Ok(Self {
            status: Status::Idle,
            path: Vec::new(),
            obstacles,
            notice: None,
            rng,
        })
    }

    /// Replace the board with a caller-provided layout and clear any stroke.
    pub fn load_layout(&mut self, obstacles: Vec<Obstacle>) {
        self.obstacles = obstacles;
        self.path.clear();
        self.status = Status::Idle;
        self.notice = None;
    }

    /// Pointer-down. Starts a stroke when idle and within the start marker's
    /// capture radius; ignored anywhere else and in every other state.
    pub fn on_down(&mut self, p: Point) -> Status {
        if self.status == Status::Idle && hit::distance(p, START) <= START_RADIUS + START_SLACK {
            self.status = Status::Drawing;
            self.path.clear();
            self.path.push(p);
            self.notice = None;
        }
        self.status
    }

    /// Pointer-move. Extends the stroke by one segment and checks it;
    /// ignored outside [`Status::Drawing`].
    pub fn on_move(&mut self, p: Point) -> Status {
        if self.status != Status::Drawing {
            return self.status;
        }
        let Some(&prev) = self.path.last() else {
            return self.status;
        };
        self.path.push(p);

        // Obstacle check comes first: a segment that both crosses an
        // obstacle and reaches the goal is a hit.
        if self.obstacles.iter().any(|&ob| hit::segment_hits_obstacle(prev, p, ob)) {
            self.status = Status::Hit;
            self.notice = Some(Notice::Hit);
        } else if hit::distance(p, GOAL) <= GOAL_RADIUS {
            self.status = Status::Won;
            self.notice = Some(Notice::Won);
        }
        self.status
    }

    /// Pointer-up. Abandons a stroke in progress; the abandoned path stays
    /// on screen until the next stroke starts. Terminal states are kept.
    pub fn on_up(&mut self) -> Status {
        if self.status == Status::Drawing {
            self.status = Status::Idle;
        }
        self.status
    }

    /// Back to idle with an empty path and a freshly scattered board.
    ///
    /// # Errors
    ///
    /// On a [`PlacementError`] the session keeps its previous board and
    /// state untouched.
    pub fn reset(&mut self) -> Result<Status, PlacementError> {
        self.obstacles = scatter::generate(&mut self.rng)?;
        self.path.clear();
        self.status = Status::Idle;
        self.notice = None;
        Ok(self.status)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The stroke drawn so far, in draw order.
    #[must_use]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The current board.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// The outcome notice, if a terminal state has been reached.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }
}
