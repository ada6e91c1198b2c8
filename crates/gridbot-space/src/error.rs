//! Error types for grid construction and access.

use gridbot_core::ErrorKind;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// Offending column.
        x: i32,
        /// Offending row.
        y: i32,
        /// Grid width at the time of access.
        width: u32,
        /// Grid height at the time of access.
        height: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// `width * height` exceeds the supported cell count.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// The largest accepted cell count.
        max: usize,
    },
    /// The allocator could not provide storage for the cells.
    AllocationFailed {
        /// Number of cells requested.
        cells: usize,
    },
    /// A dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl GridError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::EmptyGrid
            | Self::TooManyCells { .. }
            | Self::AllocationFailed { .. }
            | Self::DimensionTooLarge { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({x}, {y}) out of bounds for map size ({width}, {height})"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::TooManyCells { width, height, max } => {
                write!(f, "map size ({width}, {height}) exceeds {max} cells")
            }
            Self::AllocationFailed { cells } => {
                write!(f, "could not allocate storage for {cells} cells")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
