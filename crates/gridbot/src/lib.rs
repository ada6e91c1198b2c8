//! Gridbot: a single-robot grid-world simulator with imperfect motion.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Gridbot sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridbot::prelude::*;
//!
//! let mut sim = SimConfig::new()
//!     .map_size(5, 5)?
//!     .robot_position(2, 2)?
//!     .robot_direction(Direction::North)
//!     .hazards([(2, 0)])
//!     .blobs([(3, 2)])
//!     .seed(42)
//!     .build()?;
//!
//! assert_eq!(sim.detect_blobs(), [false, true, false, false]);
//! while sim.move_forward() {}
//! assert!(sim.detect_hazard());
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridbot-core` | `Cell`, `Direction`, `ErrorKind`, core traits |
//! | [`space`] | `gridbot-space` | `Grid` and its errors |
//! | [`engine`] | `gridbot-engine` | `Sim`, `SimConfig`, random sources |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and traits (`gridbot-core`).
pub use gridbot_core as types;

/// Bounds-checked cell grid (`gridbot-space`).
pub use gridbot_space as space;

/// Simulation engine and configuration (`gridbot-engine`).
pub use gridbot_engine as engine;

/// Common imports for typical Gridbot usage.
///
/// ```rust
/// use gridbot::prelude::*;
/// ```
pub mod prelude {
    pub use gridbot_core::{Cell, Direction, ErrorKind, RandomSource, RobotSim};
    pub use gridbot_engine::{ConfigError, MoveOutcome, RngSource, Sim, SimConfig};
    pub use gridbot_space::{Grid, GridError};
}
