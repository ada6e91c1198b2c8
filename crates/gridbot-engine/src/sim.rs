//! The robot simulation state machine.
//!
//! [`Sim`] owns the robot pose, the frozen [`Grid`], and the random
//! source. Its only state is `(position, direction)`; the two transitions
//! are [`move_forward`](RobotSim::move_forward) and
//! [`turn_clockwise`](RobotSim::turn_clockwise).
//!
//! # Imperfect motion
//!
//! A legal forward move draws `r` uniformly from `[0, 1)` and partitions
//! the unit interval with two boundaries fixed at construction:
//!
//! ```text
//! 0 ─── no_move ───────────── double_move ─── 1
//!   stall        single step        try two cells
//! ```
//!
//! `no_move = p_no_move` and `double_move = 1 - p_double_move`, so each
//! outcome has exactly its configured probability. A double move whose
//! second cell is blocked degrades to a single step.

use std::fmt;

use gridbot_core::{Cell, Direction, RandomSource, RobotSim};
use gridbot_space::Grid;
use tracing::trace;

/// What a single forward attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Cell ahead is a hazard or off the map. No draw was taken.
    Blocked,
    /// Legal attempt, but the robot stayed put.
    Stalled,
    /// Robot advanced one cell.
    Single,
    /// Robot advanced two cells.
    Double,
    /// An overshoot was drawn but the second cell was blocked, so the
    /// robot advanced one cell.
    DoubleFallback,
}

impl MoveOutcome {
    /// `false` only for [`MoveOutcome::Blocked`].
    pub fn is_legal(self) -> bool {
        self != MoveOutcome::Blocked
    }

    /// Cells travelled.
    pub fn distance(self) -> u32 {
        match self {
            MoveOutcome::Blocked | MoveOutcome::Stalled => 0,
            MoveOutcome::Single | MoveOutcome::DoubleFallback => 1,
            MoveOutcome::Double => 2,
        }
    }
}

/// A running single-robot simulation.
///
/// Built exclusively by [`SimConfig::build`](crate::SimConfig::build).
/// The robot is always inside the grid and never on a hazard.
pub struct Sim {
    x: i32,
    y: i32,
    direction: Direction,
    grid: Grid,
    rng: Box<dyn RandomSource>,
    no_move_boundary: f64,
    double_move_boundary: f64,
}

impl Sim {
    /// Assemble a simulation from parts the config has already validated.
    pub(crate) fn from_parts(
        x: i32,
        y: i32,
        direction: Direction,
        grid: Grid,
        rng: Box<dyn RandomSource>,
        no_move_probability: f64,
        double_move_probability: f64,
    ) -> Self {
        Self {
            x,
            y,
            direction,
            grid,
            rng,
            no_move_boundary: no_move_probability,
            double_move_boundary: 1.0 - double_move_probability,
        }
    }

    /// Start a new [`SimConfig`](crate::SimConfig).
    pub fn builder() -> crate::SimConfig {
        crate::SimConfig::new()
    }

    /// Current `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Direction the robot is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Map width in cells.
    pub fn map_width(&self) -> u32 {
        self.grid.width()
    }

    /// Map height in cells.
    pub fn map_height(&self) -> u32 {
        self.grid.height()
    }

    /// Read-only view of the map.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Draws at or below this value stall the robot.
    pub fn no_move_boundary(&self) -> f64 {
        self.no_move_boundary
    }

    /// Draws above this value attempt a two-cell move.
    pub fn double_move_boundary(&self) -> f64 {
        self.double_move_boundary
    }

    /// Attempt a forward move and report exactly what happened.
    ///
    /// [`RobotSim::move_forward`] is this with the outcome collapsed to
    /// [`MoveOutcome::is_legal`].
    pub fn step_forward(&mut self) -> MoveOutcome {
        let (tx, ty) = self.direction.step_from(self.x, self.y);
        if self.blocked(tx, ty) {
            trace!(x = self.x, y = self.y, dir = %self.direction, "move blocked");
            return MoveOutcome::Blocked;
        }

        let r = self.rng.next_unit();
        if r <= self.no_move_boundary {
            trace!(draw = r, x = self.x, y = self.y, "move stalled");
            return MoveOutcome::Stalled;
        }

        let mut outcome = MoveOutcome::Single;
        let mut dest = (tx, ty);
        if r > self.double_move_boundary {
            let (ox, oy) = self.direction.step_from(tx, ty);
            if self.blocked(ox, oy) {
                outcome = MoveOutcome::DoubleFallback;
            } else {
                outcome = MoveOutcome::Double;
                dest = (ox, oy);
            }
        }
        (self.x, self.y) = dest;
        trace!(draw = r, ?outcome, x = self.x, y = self.y, "moved");
        outcome
    }

    /// Hazard or off-map. Out-of-bounds access is folded in here so it
    /// never escapes the engine.
    fn blocked(&self, x: i32, y: i32) -> bool {
        match self.grid.get(x, y) {
            Ok(cell) => cell.is_hazard(),
            Err(_) => true,
        }
    }
}

impl RobotSim for Sim {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn move_forward(&mut self) -> bool {
        self.step_forward().is_legal()
    }

    fn turn_clockwise(&mut self) {
        self.direction = self.direction.clockwise();
    }

    fn detect_hazard(&self) -> bool {
        let (ax, ay) = self.direction.step_from(self.x, self.y);
        self.blocked(ax, ay)
    }

    fn detect_blobs(&self) -> [bool; 4] {
        Direction::ALL.map(|d| {
            let (ax, ay) = d.step_from(self.x, self.y);
            matches!(self.grid.get(ax, ay), Ok(Cell::ColorBlob))
        })
    }
}

impl fmt::Debug for Sim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sim")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("direction", &self.direction)
            .field("map_width", &self.grid.width())
            .field("map_height", &self.grid.height())
            .field("no_move_boundary", &self.no_move_boundary)
            .field("double_move_boundary", &self.double_move_boundary)
            .finish_non_exhaustive()
    }
}
