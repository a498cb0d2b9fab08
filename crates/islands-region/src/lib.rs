//! islands-region - Connected region sizing
//!
//! This crate provides:
//!
//! - **Adjacency** - Diagonal-only (default), 4-way and 8-way neighbors
//! - **Largest island search** - Flood fill that reports the size of the
//!   largest connected group of filled cells
//!
//! # Examples
//!
//! ## Largest island
//!
//! ```
//! use islands_region::find_largest_area;
//! use islands_region::islands_core::Grid;
//!
//! // Diagonal chain from the top-left corner
//! let grid = Grid::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
//! assert_eq!(find_largest_area(&grid), 3);
//! ```
//!
//! ## Choosing the adjacency
//!
//! ```
//! use islands_region::{ConnectivityType, IslandOptions, find_largest_area_with};
//! use islands_region::islands_core::Grid;
//!
//! // A horizontal bar: isolated cells diagonally, one region orthogonally
//! let grid = Grid::from_rows(&[[0, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
//! assert_eq!(find_largest_area_with(&grid, &IslandOptions::default()), 1);
//!
//! let options = IslandOptions::new(ConnectivityType::FourWay);
//! assert_eq!(find_largest_area_with(&grid, &options), 3);
//! ```

pub mod conncomp;
pub mod error;
pub mod island;

// Re-export core types
pub use islands_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{ConnectivityType, neighbors};

// Re-export island types and functions
pub use island::{
    IslandOptions, Traversal, find_largest_area, find_largest_area_with, largest_area_from_rows,
};
