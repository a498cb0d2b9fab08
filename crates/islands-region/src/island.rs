//! Largest island search
//!
//! This module measures connected groups of filled cells with a flood fill
//! and reports the size of the largest one. Every filled cell is claimed by
//! exactly one region and counted once.

use crate::conncomp::{ConnectivityType, neighbors};
use crate::error::RegionResult;
use islands_core::{Cell, CellValue, Grid};
use std::collections::VecDeque;

/// Order in which the frontier of a growing region is explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// FIFO frontier
    #[default]
    BreadthFirst,
    /// LIFO frontier
    DepthFirst,
}

/// Options for the largest island search
#[derive(Debug, Clone, Default)]
pub struct IslandOptions {
    /// Adjacency used to join cells into regions
    pub connectivity: ConnectivityType,
    /// Frontier order; never affects the result
    pub traversal: Traversal,
}

impl IslandOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            traversal: Traversal::default(),
        }
    }

    /// Set the traversal order
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}

/// Filled cells not yet claimed by a region.
struct Unvisited {
    pending: Vec<bool>,
    remaining: usize,
    cursor: usize,
}

impl Unvisited {
    fn new(grid: &Grid) -> Self {
        let pending = grid.as_slice().to_vec();
        let remaining = grid.count_filled();
        Self {
            pending,
            remaining,
            cursor: 0,
        }
    }

    /// Remove `index` from the set; returns `false` if it was not present.
    fn take(&mut self, index: usize) -> bool {
        if !self.pending[index] {
            return false;
        }
        self.pending[index] = false;
        self.remaining -= 1;
        true
    }

    /// Claim the next unvisited cell in row-major order.
    fn next_seed(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        while !self.pending[self.cursor] {
            self.cursor += 1;
        }
        let seed = self.cursor;
        self.take(seed);
        Some(seed)
    }
}

struct Frontier {
    queue: VecDeque<Cell>,
    traversal: Traversal,
}

impl Frontier {
    fn new(traversal: Traversal) -> Self {
        Self {
            queue: VecDeque::new(),
            traversal,
        }
    }

    fn push(&mut self, cell: Cell) {
        self.queue.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        match self.traversal {
            Traversal::BreadthFirst => self.queue.pop_front(),
            Traversal::DepthFirst => self.queue.pop_back(),
        }
    }
}

/// Find the size of the largest diagonally connected group of filled cells
///
/// Uses the default [`IslandOptions`]: diagonal-only adjacency and a
/// breadth-first frontier.
///
/// # Returns
///
/// The cell count of the largest region, or 0 if the grid has no filled
/// cells.
pub fn find_largest_area(grid: &Grid) -> usize {
    find_largest_area_with(grid, &IslandOptions::default())
}

/// Find the size of the largest connected group of filled cells
///
/// # Arguments
///
/// * `grid` - Input grid
/// * `options` - Connectivity and traversal order
///
/// # Returns
///
/// The cell count of the largest region, or 0 if the grid has no filled
/// cells.
pub fn find_largest_area_with(grid: &Grid, options: &IslandOptions) -> usize {
    log::debug!(
        "searching {}x{} grid, connectivity {:?}",
        grid.height(),
        grid.width(),
        options.connectivity
    );

    let mut unvisited = Unvisited::new(grid);
    let mut frontier = Frontier::new(options.traversal);
    let mut max_area = 0;
    let mut regions = 0usize;

    while let Some(seed) = unvisited.next_seed() {
        let area = measure_region(
            grid,
            seed,
            options.connectivity,
            &mut unvisited,
            &mut frontier,
        );
        regions += 1;
        log::trace!("region {} at {:?}: {} cells", regions, grid.cell_at(seed), area);
        max_area = max_area.max(area);
    }

    log::debug!("found {} regions, largest has {} cells", regions, max_area);
    max_area
}

/// Grow one region from an already claimed seed and return its size.
fn measure_region(
    grid: &Grid,
    seed: usize,
    connectivity: ConnectivityType,
    unvisited: &mut Unvisited,
    frontier: &mut Frontier,
) -> usize {
    let mut area = 0;
    frontier.push(grid.cell_at(seed));

    while let Some(cell) = frontier.pop() {
        area += 1;
        for next in neighbors(grid, cell, connectivity) {
            // Claimed on enqueue so a cell reachable from two frontier cells
            // is counted once.
            if unvisited.take(grid.index_of(next)) {
                frontier.push(next);
            }
        }
    }

    area
}

/// Find the largest diagonally connected region in nested rows of values
///
/// Convenience wrapper that validates the rows with [`Grid::from_rows`]
/// and then applies [`find_largest_area`].
///
/// # Errors
///
/// Returns [`RegionError::Core`](crate::RegionError::Core) wrapping
/// `InvalidShape` if the rows are not all the same length.
pub fn largest_area_from_rows<R, T>(rows: &[R]) -> RegionResult<usize>
where
    R: AsRef<[T]>,
    T: CellValue,
{
    let grid = Grid::from_rows(rows)?;
    Ok(find_largest_area(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegionError;

    fn create_test_grid(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(row, col) in cells {
            grid.set(row, col, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(find_largest_area(&Grid::new(0, 0).unwrap()), 0);
        assert_eq!(find_largest_area(&Grid::new(4, 0).unwrap()), 0);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(find_largest_area(&Grid::new(7, 5).unwrap()), 0);
    }

    #[test]
    fn test_single_cell() {
        let grid = create_test_grid(4, 4, &[(2, 1)]);
        assert_eq!(find_largest_area(&grid), 1);
    }

    #[test]
    fn test_diagonal_chain() {
        let grid = create_test_grid(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(find_largest_area(&grid), 3);
    }

    #[test]
    fn test_straight_line_is_isolated() {
        let grid = create_test_grid(4, 3, &[(1, 0), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(find_largest_area(&grid), 1);

        let four = IslandOptions::new(ConnectivityType::FourWay);
        assert_eq!(find_largest_area_with(&grid, &four), 4);
    }

    #[test]
    fn test_plus_shape() {
        // The centre touches its arms only orthogonally; the arms touch
        // each other diagonally.
        let grid = create_test_grid(3, 3, &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
        assert_eq!(find_largest_area(&grid), 4);

        let four = IslandOptions::new(ConnectivityType::FourWay);
        assert_eq!(find_largest_area_with(&grid, &four), 5);
        let eight = IslandOptions::new(ConnectivityType::EightWay);
        assert_eq!(find_largest_area_with(&grid, &eight), 5);
    }

    #[test]
    fn test_diamond_counted_once() {
        // (2,1) is reachable from both (1,0) and (1,2)
        let grid = create_test_grid(3, 3, &[(0, 1), (1, 0), (1, 2), (2, 1)]);
        assert_eq!(find_largest_area(&grid), 4);
        let dfs = IslandOptions::default().with_traversal(Traversal::DepthFirst);
        assert_eq!(find_largest_area_with(&grid, &dfs), 4);
    }

    #[test]
    fn test_full_block() {
        // Diagonal adjacency splits a checkerboard into two colour classes
        let grid = Grid::from_rows(&[[1; 4]; 4]).unwrap();
        assert_eq!(find_largest_area(&grid), 8);
        let eight = IslandOptions::new(ConnectivityType::EightWay);
        assert_eq!(find_largest_area_with(&grid, &eight), 16);
    }

    #[test]
    fn test_picks_maximum() {
        let grid = create_test_grid(5, 5, &[(0, 0), (1, 1), (0, 4), (1, 3), (2, 2), (4, 0)]);
        assert_eq!(find_largest_area(&grid), 5);
    }

    #[test]
    fn test_idempotent() {
        let grid = create_test_grid(4, 3, &[(0, 0), (1, 1), (2, 0), (0, 3)]);
        let first = find_largest_area(&grid);
        assert_eq!(find_largest_area(&grid), first);
        assert_eq!(first, 3);
    }

    #[test]
    fn test_concurrent_calls() {
        let grid = create_test_grid(4, 4, &[(0, 0), (1, 1), (2, 2), (3, 1), (0, 3)]);
        let results: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| find_largest_area(&grid)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec![4; 4]);
    }

    #[test]
    fn test_options_builder() {
        let options =
            IslandOptions::new(ConnectivityType::FourWay).with_traversal(Traversal::DepthFirst);
        assert_eq!(options.connectivity, ConnectivityType::FourWay);
        assert_eq!(options.traversal, Traversal::DepthFirst);

        let defaults = IslandOptions::default();
        assert_eq!(defaults.connectivity, ConnectivityType::Diagonal);
        assert_eq!(defaults.traversal, Traversal::BreadthFirst);
    }

    #[test]
    fn test_from_rows_numeric() {
        let rows = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 2.5, 0.0],
            vec![0.0, 0.0, -1.0],
        ];
        assert_eq!(largest_area_from_rows(&rows).unwrap(), 3);
    }

    #[test]
    fn test_from_rows_jagged() {
        let rows = vec![vec![true, false], vec![true]];
        let err = largest_area_from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            RegionError::Core(islands_core::Error::InvalidShape { row: 1, .. })
        ));
    }
}
