//! Error types for islands-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context to point at the offending row or
//! cell without exposing the grid's storage layout.

use thiserror::Error;

/// islands-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rows of a grid have differing lengths
    #[error("invalid shape: row {row} has {actual} cells, expected {expected}")]
    InvalidShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Cell count `width * height` does not fit in `usize`
    #[error("grid too large: {width}x{height} cells overflow usize")]
    TooLarge { width: usize, height: usize },

    /// Flat cell buffer does not match the declared dimensions
    #[error("dimension mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Cell coordinates out of bounds
    #[error("cell ({row}, {col}) out of bounds for {height}x{width} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, Error>;
