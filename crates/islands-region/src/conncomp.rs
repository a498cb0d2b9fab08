//! Cell adjacency
//!
//! Defines which cells count as neighbors when growing a region. The
//! default is diagonal-only adjacency: two cells touch iff they differ by
//! exactly `(±1, ±1)`. Orthogonal and full 8-way adjacency are available
//! for callers that want the conventional island definitions.

use islands_core::{Cell, Grid};

const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const ALL: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectivityType {
    /// Diagonal neighbors only (the four corners)
    #[default]
    Diagonal,
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (orthogonal and diagonal)
    EightWay,
}

impl ConnectivityType {
    /// `(d_row, d_col)` offsets of every neighbor under this connectivity.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            ConnectivityType::Diagonal => &DIAGONAL,
            ConnectivityType::FourWay => &ORTHOGONAL,
            ConnectivityType::EightWay => &ALL,
        }
    }
}

/// In-bounds neighbors of `cell` under the given connectivity.
///
/// Neighbors are yielded regardless of whether they are filled.
pub fn neighbors(
    grid: &Grid,
    cell: Cell,
    connectivity: ConnectivityType,
) -> impl Iterator<Item = Cell> + '_ {
    connectivity
        .offsets()
        .iter()
        .filter_map(move |&(d_row, d_col)| {
            let row = cell.row.checked_add_signed(d_row)?;
            let col = cell.col.checked_add_signed(d_col)?;
            let next = Cell::new(row, col);
            grid.contains(next).then_some(next)
        })
}
