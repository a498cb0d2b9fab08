//! islands-test - Regression test framework for the islands workspace
//!
//! This crate provides a small regression harness and grid fixtures for the
//! workspace's integration tests:
//!
//! - [`RegParams`] - Indexed comparisons with a pass/fail summary
//! - [`grid_from_pattern`] - Build a [`Grid`] from a text picture
//! - [`render_grid`] - Render a [`Grid`] back to the same text form
//! - [`random_grid`] - Reproducible pseudo-random grids
//!
//! # Usage
//!
//! ```ignore
//! use islands_test::{RegParams, grid_from_pattern};
//!
//! let mut rp = RegParams::new("island");
//! let grid = grid_from_pattern("#..\n.#.\n..#").unwrap();
//! rp.compare_counts(3, find_largest_area(&grid));
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every grid under test

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use islands_core::{Cell, Grid};

/// Build a grid from a text picture
///
/// Each non-blank line is a row. `#` and `1` mark filled cells, `.` and
/// `0` mark empty ones. Leading and trailing whitespace on each line is
/// ignored, so patterns can be indented inside raw strings.
///
/// # Errors
///
/// Returns [`TestError::InvalidPattern`] on an unknown character and
/// [`TestError::Grid`] if the rows differ in length.
pub fn grid_from_pattern(pattern: &str) -> TestResult<Grid> {
    let rows = pattern
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(line, text)| {
            text.chars()
                .enumerate()
                .map(|(column, ch)| match ch {
                    '#' | '1' => Ok(true),
                    '.' | '0' => Ok(false),
                    _ => Err(TestError::InvalidPattern { ch, line, column }),
                })
                .collect::<TestResult<Vec<bool>>>()
        })
        .collect::<TestResult<Vec<Vec<bool>>>>()?;

    Ok(Grid::from_rows(&rows)?)
}

/// Render a grid as `#`/`.` rows separated by newlines
pub fn render_grid(grid: &Grid) -> String {
    (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| {
                    if grid.is_filled_unchecked(Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a reproducible pseudo-random grid
///
/// Each cell is filled with probability `density` (clamped to `[0, 1]`).
/// The same `seed` always yields the same grid.
///
/// # Errors
///
/// Returns [`TestError::Grid`] if the dimensions overflow the cell count.
pub fn random_grid(width: usize, height: usize, density: f64, seed: u32) -> TestResult<Grid> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = SimpleRng::new(seed);
    let mut grid = Grid::new(width, height)?;
    for row in 0..height {
        for col in 0..width {
            if rng.next_f64() < density {
                grid.set(row, col, true)?;
            }
        }
    }
    Ok(grid)
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        // High bits only; the low bits of a power-of-two LCG are weak
        ((self.next() >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_pattern() {
        let grid = grid_from_pattern(
            "
            #.#
            010
            ",
        )
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.count_filled(), 3);
        assert_eq!(render_grid(&grid), "#.#\n.#.");
    }

    #[test]
    fn test_grid_from_pattern_empty() {
        let grid = grid_from_pattern("").unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_pattern_bad_char() {
        let err = grid_from_pattern("#.\n.x").unwrap_err();
        assert!(matches!(
            err,
            TestError::InvalidPattern {
                ch: 'x',
                line: 1,
                column: 1
            }
        ));
    }

    #[test]
    fn test_grid_from_pattern_jagged() {
        let err = grid_from_pattern("##\n#").unwrap_err();
        assert!(matches!(err, TestError::Grid(_)));
    }

    #[test]
    fn test_random_grid_reproducible() {
        let a = random_grid(20, 15, 0.4, 7).unwrap();
        let b = random_grid(20, 15, 0.4, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.width(), 20);
        assert_eq!(a.height(), 15);
    }

    #[test]
    fn test_random_grid_density_bounds() {
        assert_eq!(random_grid(10, 10, 0.0, 1).unwrap().count_filled(), 0);
        assert_eq!(random_grid(10, 10, 1.0, 1).unwrap().count_filled(), 100);
    }

    #[test]
    fn test_random_grid_overflow() {
        let err = random_grid(usize::MAX, 2, 0.5, 1).unwrap_err();
        assert!(matches!(
            err,
            TestError::Grid(islands_core::Error::TooLarge { height: 2, .. })
        ));
    }
}
