//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] accumulates construction parameters. Each setter checks
//! its own argument immediately; [`build()`](SimConfig::build) checks the
//! cross-field invariants, stamps the map, and hands back a [`Sim`].

use std::error::Error;
use std::fmt;

use gridbot_core::{Cell, Direction, ErrorKind, RandomSource};
use gridbot_space::{Grid, GridError};
use tracing::debug;

use crate::random::RngSource;
use crate::sim::Sim;

/// Default probability that a legal forward move stalls.
pub const DEFAULT_NO_MOVE_PROBABILITY: f64 = 0.1;

/// Default probability that a legal forward move attempts two cells.
pub const DEFAULT_DOUBLE_MOVE_PROBABILITY: f64 = 0.1;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while configuring or building a [`Sim`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Map width or height is not positive.
    InvalidMapSize {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// An initial position component is negative.
    NegativePosition {
        /// `"x"` or `"y"`.
        axis: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A motion probability is outside `[0, 1]` or NaN.
    InvalidProbability {
        /// Which probability was being set.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `no_move + double_move` exceeds 1.
    ProbabilitySumExceeded {
        /// Configured stall probability.
        no_move: f64,
        /// Configured overshoot probability.
        double_move: f64,
    },
    /// A hazard was placed on the robot's starting cell.
    HazardOnRobotStart {
        /// Column of the overlap.
        x: i32,
        /// Row of the overlap.
        y: i32,
    },
    /// A blob was placed on a hazard.
    BlobOnHazard {
        /// Column of the overlap.
        x: i32,
        /// Row of the overlap.
        y: i32,
    },
    /// `build()` called before `map_size()`.
    MissingMapSize,
    /// `build()` called before `robot_position()`.
    MissingPosition,
    /// `build()` called before `robot_direction()`.
    MissingDirection,
    /// The initial position lies outside the configured map.
    PositionOutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Map width.
        width: i32,
        /// Map height.
        height: i32,
    },
    /// Grid construction or stamping failed (e.g. a hazard off the map).
    Grid(GridError),
}

impl ConfigError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMapSize { .. }
            | Self::NegativePosition { .. }
            | Self::InvalidProbability { .. }
            | Self::ProbabilitySumExceeded { .. }
            | Self::HazardOnRobotStart { .. }
            | Self::BlobOnHazard { .. } => ErrorKind::InvalidArgument,
            Self::MissingMapSize | Self::MissingPosition | Self::MissingDirection => {
                ErrorKind::IllegalState
            }
            Self::PositionOutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::Grid(e) => e.kind(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMapSize { width, height } => {
                write!(f, "illegal map size: ({width}, {height})")
            }
            Self::NegativePosition { axis, value } => {
                write!(f, "negative initial {axis} coordinate: {value}")
            }
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} probability must be in [0, 1], got {value}")
            }
            Self::ProbabilitySumExceeded {
                no_move,
                double_move,
            } => write!(
                f,
                "imperfect motion probabilities sum to {} (> 1): no_move {no_move}, double_move {double_move}",
                no_move + double_move
            ),
            Self::HazardOnRobotStart { x, y } => write!(
                f,
                "overlapping coordinates ({x}, {y}) for hazard and initial robot position"
            ),
            Self::BlobOnHazard { x, y } => write!(
                f,
                "overlapping coordinates ({x}, {y}) for hazard and color blob"
            ),
            Self::MissingMapSize => write!(f, "size of the map has not been set"),
            Self::MissingPosition => write!(f, "position of the robot has not been set"),
            Self::MissingDirection => {
                write!(f, "direction the robot is facing has not been set")
            }
            Self::PositionOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "initial position ({x}, {y}) out of bounds for map size ({width}, {height})"
            ),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Builder-input for constructing a [`Sim`].
///
/// Required: [`map_size`](Self::map_size),
/// [`robot_position`](Self::robot_position),
/// [`robot_direction`](Self::robot_direction). Everything else has a
/// default. Setting a field twice keeps the last value.
/// [`build`](Self::build) consumes the config.
pub struct SimConfig {
    map_size: Option<(i32, i32)>,
    position: Option<(i32, i32)>,
    direction: Option<Direction>,
    hazards: Vec<(i32, i32)>,
    blobs: Vec<(i32, i32)>,
    rng: Option<Box<dyn RandomSource>>,
    seed: Option<u64>,
    no_move_probability: f64,
    double_move_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            map_size: None,
            position: None,
            direction: None,
            hazards: Vec::new(),
            blobs: Vec::new(),
            rng: None,
            seed: None,
            no_move_probability: DEFAULT_NO_MOVE_PROBABILITY,
            double_move_probability: DEFAULT_DOUBLE_MOVE_PROBABILITY,
        }
    }
}

impl SimConfig {
    /// Empty configuration with default probabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the map dimensions. Both must be positive.
    pub fn map_size(mut self, width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidMapSize { width, height });
        }
        self.map_size = Some((width, height));
        Ok(self)
    }

    /// Set the robot's starting cell. Both coordinates must be
    /// non-negative; the upper bound is checked in [`build`](Self::build).
    pub fn robot_position(mut self, x: i32, y: i32) -> Result<Self, ConfigError> {
        if x < 0 {
            return Err(ConfigError::NegativePosition {
                axis: "x",
                value: x,
            });
        }
        if y < 0 {
            return Err(ConfigError::NegativePosition {
                axis: "y",
                value: y,
            });
        }
        self.position = Some((x, y));
        Ok(self)
    }

    /// Set the robot's starting direction.
    pub fn robot_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Hazard cells, stamped in order at build time. Default: none.
    pub fn hazards(mut self, coords: impl IntoIterator<Item = (i32, i32)>) -> Self {
        self.hazards = coords.into_iter().collect();
        self
    }

    /// Color blob cells, stamped in order after hazards. Default: none.
    pub fn blobs(mut self, coords: impl IntoIterator<Item = (i32, i32)>) -> Self {
        self.blobs = coords.into_iter().collect();
        self
    }

    /// Use `source` for imperfect-motion draws. Takes precedence over
    /// [`seed`](Self::seed).
    pub fn random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(source));
        self
    }

    /// Seed the default ChaCha8 source for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Probability that a legal move stalls. Default: 0.1.
    pub fn no_move_probability(mut self, p: f64) -> Result<Self, ConfigError> {
        self.no_move_probability = check_probability("no_move", p)?;
        Ok(self)
    }

    /// Probability that a legal move attempts two cells. Default: 0.1.
    pub fn double_move_probability(mut self, p: f64) -> Result<Self, ConfigError> {
        self.double_move_probability = check_probability("double_move", p)?;
        Ok(self)
    }

    /// Validate the cross-field invariants and produce a [`Sim`].
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. map size set, 2. position set, 3. direction set,
    /// 4. position inside the map, 5. probabilities sum to at most 1,
    /// 6. hazards (in order) avoid the robot start and lie on the map,
    /// 7. blobs (in order) avoid hazards and lie on the map.
    pub fn build(self) -> Result<Sim, ConfigError> {
        let (width, height) = self.map_size.ok_or(ConfigError::MissingMapSize)?;
        let (x, y) = self.position.ok_or(ConfigError::MissingPosition)?;
        let direction = self.direction.ok_or(ConfigError::MissingDirection)?;

        if x >= width || y >= height {
            return Err(ConfigError::PositionOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        // Compared in boundary form so that no_move <= 1 - double_move
        // holds exactly for the boundaries the engine derives.
        if self.no_move_probability > 1.0 - self.double_move_probability {
            return Err(ConfigError::ProbabilitySumExceeded {
                no_move: self.no_move_probability,
                double_move: self.double_move_probability,
            });
        }

        // Both dimensions were checked positive in map_size().
        let mut grid = Grid::new(width as u32, height as u32)?;

        for &(hx, hy) in &self.hazards {
            if (hx, hy) == (x, y) {
                return Err(ConfigError::HazardOnRobotStart { x: hx, y: hy });
            }
            grid.set(hx, hy, Cell::Hazard)?;
        }

        for &(bx, by) in &self.blobs {
            if grid.get(bx, by)?.is_hazard() {
                return Err(ConfigError::BlobOnHazard { x: bx, y: by });
            }
            grid.set(bx, by, Cell::ColorBlob)?;
        }

        let rng: Box<dyn RandomSource> = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(RngSource::seeded(seed)),
            (None, None) => Box::new(RngSource::from_entropy()),
        };

        debug!(
            width,
            height,
            x,
            y,
            %direction,
            hazards = grid.count(Cell::Hazard),
            blobs = grid.count(Cell::ColorBlob),
            no_move = self.no_move_probability,
            double_move = self.double_move_probability,
            "simulation built"
        );

        Ok(Sim::from_parts(
            x,
            y,
            direction,
            grid,
            rng,
            self.no_move_probability,
            self.double_move_probability,
        ))
    }
}

fn check_probability(name: &'static str, p: f64) -> Result<f64, ConfigError> {
    // NaN fails `contains`, so it is rejected here too.
    if !(0.0..=1.0).contains(&p) {
        return Err(ConfigError::InvalidProbability { name, value: p });
    }
    Ok(p)
}

impl fmt::Debug for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimConfig")
            .field("map_size", &self.map_size)
            .field("position", &self.position)
            .field("direction", &self.direction)
            .field("hazards", &self.hazards.len())
            .field("blobs", &self.blobs.len())
            .field("custom_rng", &self.rng.is_some())
            .field("seed", &self.seed)
            .field("no_move_probability", &self.no_move_probability)
            .field("double_move_probability", &self.double_move_probability)
            .finish()
    }
}
