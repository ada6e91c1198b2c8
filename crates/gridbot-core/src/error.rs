//! Error classification shared by every Gridbot subsystem.
//!
//! Each crate defines its own detailed error enum; all of them map onto
//! the closed [`ErrorKind`] set so callers can branch on the class of
//! failure without matching every variant.

use std::fmt;

/// The three classes of failure a simulation can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: bad dimensions, negative coordinates,
    /// out-of-range probabilities, or overlapping placements.
    InvalidArgument,
    /// A required construction parameter was never supplied.
    IllegalState,
    /// A coordinate lies outside the map.
    OutOfBounds,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::IllegalState => write!(f, "illegal state"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}
