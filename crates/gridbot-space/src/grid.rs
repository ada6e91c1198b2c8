//! Dense 2D cell grid.

use crate::error::GridError;
use gridbot_core::Cell;

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Coordinates are `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// Storage is row-major. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum total cell count.
    pub const MAX_CELLS: usize = u32::MAX as usize;

    /// Create a `width x height` grid with every cell [`Cell::Empty`].
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    /// A product above [`MAX_CELLS`](Self::MAX_CELLS) is
    /// `Err(GridError::TooManyCells)`, and an allocation the allocator
    /// refuses is `Err(GridError::AllocationFailed)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot_core::Cell;
    /// use gridbot_space::Grid;
    ///
    /// let grid = Grid::new(4, 3).unwrap();
    /// assert_eq!(grid.cell_count(), 12);
    /// assert_eq!(grid.get(3, 2).unwrap(), Cell::Empty);
    /// assert!(grid.get(4, 0).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let cell_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(GridError::TooManyCells {
                width,
                height,
                max: Self::MAX_CELLS,
            })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .map_err(|_| GridError::AllocationFailed { cells: cell_count })?;
        cells.resize(cell_count, Cell::Empty);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }
}
