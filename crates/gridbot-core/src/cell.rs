//! Grid cell contents.

/// What occupies a single grid cell.
///
/// Cells carry no per-cell data beyond their identity. A grid starts
/// all-[`Empty`](Cell::Empty); hazards and blobs are stamped once during
/// construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Free cell the robot may occupy.
    #[default]
    Empty,
    /// Impassable cell. The robot can never enter or start on one.
    Hazard,
    /// Cell carrying a detectable color marker. Passable.
    ColorBlob,
}

impl Cell {
    /// Returns `true` for [`Cell::Hazard`].
    pub fn is_hazard(self) -> bool {
        self == Cell::Hazard
    }

    /// Returns `true` for [`Cell::ColorBlob`].
    pub fn is_blob(self) -> bool {
        self == Cell::ColorBlob
    }
}
