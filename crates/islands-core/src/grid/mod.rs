//! Grid - The binary cell container
//!
//! The `Grid` structure is the input type for every region operation.
//! It holds a rectangular `height × width` array of filled/empty cells.
//!
//! # Cell layout
//!
//! - Cells are stored row-major in a single dense `Vec<bool>`
//! - Cell `(row, col)` lives at index `row * width + col`
//! - A grid with zero rows or zero columns is empty and has no cells
//!
//! # Construction
//!
//! Grids are built from nested rows with [`Grid::from_rows`], which rejects
//! jagged input, or from a flat buffer with [`Grid::from_vec`]. Any value
//! implementing [`CellValue`](crate::CellValue) can be used as a source.

mod access;
mod transform;

use crate::error::{Error, Result};
use crate::value::CellValue;

/// A cell coordinate `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0 <= row < height`
    pub row: usize,
    /// Column index, `0 <= col < width`
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular binary grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-empty grid of the given dimensions.
    ///
    /// Either dimension may be zero, in which case the grid has no cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooLarge`] if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// All-empty grid whose cell count is already known to fit.
    pub(crate) fn blank(width: usize, height: usize, len: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    /// Build a grid from nested rows of truthy/falsy values.
    ///
    /// The width is taken from the first row. An empty slice yields a
    /// `0 × 0` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if any row differs in length from the
    /// first one, and [`Error::TooLarge`] if the cell count overflows `usize`.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: CellValue,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(cell_count(width, height)?);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(Error::InvalidShape {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values.iter().map(CellValue::is_filled));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooLarge`] if `width * height` overflows `usize`, and
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_vec<T: CellValue>(width: usize, height: usize, data: &[T]) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells: data.iter().map(CellValue::is_filled).collect(),
        })
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether `cell` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major index of an in-bounds cell.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Cell at a row-major index.
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.width, index % self.width)
    }

    /// Raw row-major cell data
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Count the filled cells.
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over the coordinates of all filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(|(i, _)| self.cell_at(i))
    }
}

/// Number of cells in a `width × height` grid, rejecting overflow.
fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(Error::TooLarge { width, height })
}
