//! Error types for islands-region

use thiserror::Error;

/// Errors that can occur during region operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (e.g. a jagged input grid)
    #[error("core error: {0}")]
    Core(#[from] islands_core::Error),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
