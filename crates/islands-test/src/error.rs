//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Unknown character in a grid pattern
    #[error("invalid pattern character '{ch}' at line {line}, column {column}")]
    InvalidPattern {
        ch: char,
        line: usize,
        column: usize,
    },

    /// Pattern produced a non-rectangular grid
    #[error("grid error: {0}")]
    Grid(#[from] islands_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
