//! Islands - Largest connected region of a binary grid
//!
//! # Overview
//!
//! Given a rectangular grid of truthy/falsy values, [`find_largest_area`]
//! returns the number of cells in the largest connected group of filled
//! cells. Cells are joined diagonally by default; 4-way and 8-way
//! adjacency are available through [`IslandOptions`].
//!
//! # Example
//!
//! ```
//! use islands::{Grid, find_largest_area};
//!
//! let grid = Grid::from_rows(&[
//!     [1, 0, 0, 1],
//!     [0, 1, 1, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! assert_eq!(find_largest_area(&grid), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use islands_core::*;

// Re-export the region API at the top level as well as a module
pub use islands_region as region;
pub use islands_region::{
    ConnectivityType, IslandOptions, RegionError, RegionResult, Traversal, find_largest_area,
    find_largest_area_with, largest_area_from_rows,
};
