//! Grid coordinates
//!
//! A [`Coord`] is both an index into a [`Grid`](crate::Grid) and a point in
//! the plane. Rows grow downward and columns grow to the right.

use std::fmt;

/// A `(row, col)` position on a grid.
///
/// Ordering is row-major, so sorting a slice of coordinates yields raster
/// scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    /// Row index (y)
    pub row: u32,
    /// Column index (x)
    pub col: u32,
}

impl Coord {
    /// Create a new coordinate
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset.
    ///
    /// Returns `None` if the result would be negative or overflow `u32`.
    /// Upper bounds are not checked here; see [`Grid::neighbor`](crate::Grid::neighbor).
    #[inline]
    pub fn offset(self, drow: i32, dcol: i32) -> Option<Self> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        Some(Self { row, col })
    }

    /// Euclidean distance to another coordinate.
    pub fn distance(self, other: Coord) -> f64 {
        let dr = f64::from(self.row) - f64::from(other.row);
        let dc = f64::from(self.col) - f64::from(other.col);
        dr.hypot(dc)
    }

    /// Chebyshev (king move) distance to another coordinate.
    ///
    /// Two distinct coordinates are 8-adjacent iff this is 1.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(u32, u32)> for Coord {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (u32, u32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
