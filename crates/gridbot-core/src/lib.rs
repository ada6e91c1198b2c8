//! Core types and traits for the Gridbot simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the workspace (cells, directions),
//! the error classification, and the traits at the engine's seams:
//! the random source and the robot behavioral contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod random;
pub mod traits;

pub use cell::Cell;
pub use direction::Direction;
pub use error::ErrorKind;
pub use random::RandomSource;
pub use traits::RobotSim;
