//! Simulation engine for Gridbot.
//!
//! A single robot lives on a rectangular [`Grid`](gridbot_space::Grid),
//! faces one of four directions, and moves forward imperfectly: a move
//! can stall or overshoot by one cell. Construction goes through
//! [`SimConfig`], which validates every parameter before a [`Sim`]
//! exists.
//!
//! ```rust
//! use gridbot_core::{Direction, RobotSim};
//! use gridbot_engine::SimConfig;
//!
//! let mut sim = SimConfig::new()
//!     .map_size(5, 5)?
//!     .robot_position(2, 2)?
//!     .robot_direction(Direction::North)
//!     .hazards([(2, 0)])
//!     .seed(7)
//!     .build()?;
//!
//! assert_eq!((sim.x(), sim.y()), (2, 2));
//! sim.turn_clockwise();
//! assert_eq!(sim.direction(), Direction::East);
//! # Ok::<(), gridbot_engine::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod random;
pub mod sim;

pub use config::{
    ConfigError, SimConfig, DEFAULT_DOUBLE_MOVE_PROBABILITY, DEFAULT_NO_MOVE_PROBABILITY,
};
pub use random::RngSource;
pub use sim::{MoveOutcome, Sim};
