//! Orthogonal grid transforms
//!
//! Transposition and quarter-turn rotation. Both map the diagonal offsets
//! `(±1, ±1)` onto themselves and the orthogonal offsets onto each other,
//! so region sizes under any of the supported connectivities are preserved.

use super::{Cell, Grid};

impl Grid {
    /// Swap rows and columns.
    ///
    /// The result has dimensions `width × height`; cell `(r, c)` moves to
    /// `(c, r)`.
    pub fn transpose(&self) -> Grid {
        let mut out = Grid::blank(self.height, self.width, self.len());
        for cell in self.filled_cells() {
            let index = out.index_of(Cell::new(cell.col, cell.row));
            out.cells[index] = true;
        }
        out
    }

    /// Rotate the grid 90° clockwise.
    ///
    /// Cell `(r, c)` moves to `(c, height - 1 - r)`.
    pub fn rotate_90(&self) -> Grid {
        let mut out = Grid::blank(self.height, self.width, self.len());
        for cell in self.filled_cells() {
            let index = out.index_of(Cell::new(cell.col, self.height - 1 - cell.row));
            out.cells[index] = true;
        }
        out
    }
}
