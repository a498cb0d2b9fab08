//! islands-core - Basic data structures for connected-region analysis
//!
//! This crate provides the fundamental types shared by the islands
//! workspace:
//!
//! - [`Grid`] - Rectangular binary cell container
//! - [`Cell`] - `(row, col)` coordinate
//! - [`CellValue`] - Truthiness of source values (`bool`, integers, floats)
//! - [`Error`] / [`Result`] - Grid construction and access errors

pub mod error;
pub mod grid;
pub mod value;

pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use value::CellValue;
