//! Cell access functions
//!
//! Bounds-checked getters and setters for individual cells.

use super::{Cell, Grid};
use crate::error::{Error, Result};

impl Grid {
    /// Get the state of the cell at `(row, col)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn is_filled(&self, row: usize, col: usize) -> Option<bool> {
        let cell = Cell::new(row, col);
        self.contains(cell).then(|| self.cells[self.index_of(cell)])
    }

    /// Get the state of a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the row-major index falls outside the cell buffer.
    #[inline]
    pub fn is_filled_unchecked(&self, cell: Cell) -> bool {
        self.cells[self.index_of(cell)]
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, filled: bool) -> Result<()> {
        let cell = Cell::new(row, col);
        if !self.contains(cell) {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let index = self.index_of(cell);
        self.cells[index] = filled;
        Ok(())
    }
}
