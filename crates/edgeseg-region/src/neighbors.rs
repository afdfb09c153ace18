//! Neighbor traversal
//!
//! Enumerates the in-bounds neighbors of a grid position. Every other
//! algorithm in this crate (growing, boundary tests, tracing) is built on
//! these two primitives:
//!
//! - [`neighbors`] yields the neighbor coordinates as an iterator that does
//!   not borrow the grid, so callers may mutate the grid while iterating
//! - [`for_each_neighbor`] drives a visitor closure that can stop the walk
//!   early by returning `false`
//!
//! Neighbors are always produced in row-major offset order:
//!
//! ```text
//! 0 1 2
//! 3 . 4
//! 5 6 7
//! ```
//!
//! filtered by the requested [`Connectivity`].

use edgeseg_core::{Coord, Grid};

/// Connectivity type for neighbor traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, left, right, down)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
    /// Only the four diagonal neighbors.
    ///
    /// Neighbors sharing the center's row or column are skipped. Kept so
    /// results from diagonal-only pipelines can be reproduced.
    DiagonalOnly,
}

impl Connectivity {
    /// Whether the offset `(drow, dcol)` is a neighbor under this connectivity.
    #[inline]
    pub fn includes(self, drow: i32, dcol: i32) -> bool {
        if drow == 0 && dcol == 0 {
            return false;
        }
        match self {
            Connectivity::FourWay => drow == 0 || dcol == 0,
            Connectivity::EightWay => true,
            Connectivity::DiagonalOnly => drow != 0 && dcol != 0,
        }
    }

    /// Offsets of this connectivity in traversal order.
    pub fn offsets(self) -> impl Iterator<Item = (i32, i32)> {
        OFFSETS
            .into_iter()
            .filter(move |&(dr, dc)| self.includes(dr, dc))
    }

    /// Maximum number of neighbors a pixel can have.
    pub fn max_neighbors(self) -> usize {
        match self {
            Connectivity::EightWay => 8,
            Connectivity::FourWay | Connectivity::DiagonalOnly => 4,
        }
    }
}

/// All eight offsets in row-major order.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterate over the in-bounds neighbors of `center`.
///
/// The iterator copies the grid dimensions and holds no borrow of `grid`.
pub fn neighbors(
    grid: &Grid,
    center: Coord,
    connectivity: Connectivity,
) -> impl Iterator<Item = Coord> + use<> {
    let (rows, cols) = (grid.rows(), grid.cols());
    connectivity.offsets().filter_map(move |(dr, dc)| {
        center
            .offset(dr, dc)
            .filter(|c| c.row < rows && c.col < cols)
    })
}

/// Call `visit` on each in-bounds neighbor of `center`.
///
/// If `visit` returns `false` the traversal stops immediately.
///
/// # Returns
///
/// `true` if every neighbor was visited, `false` if the visitor stopped
/// the traversal.
pub fn for_each_neighbor<F>(
    grid: &Grid,
    center: Coord,
    connectivity: Connectivity,
    mut visit: F,
) -> bool
where
    F: FnMut(Coord) -> bool,
{
    neighbors(grid, center, connectivity).all(|c| visit(c))
}
