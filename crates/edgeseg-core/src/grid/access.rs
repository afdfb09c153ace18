//! Sample access for Grid
//!
//! Checked accessors return `Option`/`Result`; the `*_unchecked` variants
//! skip the bounds test and panic on out-of-range input, for loops that
//! have already validated their coordinates.

use super::Grid;
use crate::coord::Coord;
use crate::error::{Error, Result};

impl Grid {
    #[inline]
    fn index(&self, at: Coord) -> usize {
        at.row as usize * self.cols as usize + at.col as usize
    }

    /// Get the sample at `at`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, at: Coord) -> Option<u8> {
        if self.contains(at) {
            Some(self.data[self.index(at)])
        } else {
            None
        }
    }

    /// Get the sample at `at` without a bounds test.
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, at: Coord) -> u8 {
        debug_assert!(self.contains(at), "{at} outside {}x{}", self.rows, self.cols);
        self.data[self.index(at)]
    }

    /// Set the sample at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `at` is outside the grid.
    pub fn set(&mut self, at: Coord, value: u8) -> Result<()> {
        if !self.contains(at) {
            return Err(Error::IndexOutOfBounds {
                row: at.row,
                col: at.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(at);
        self.data[idx] = value;
        Ok(())
    }

    /// Set the sample at `at` without a bounds test.
    #[inline]
    pub fn set_unchecked(&mut self, at: Coord, value: u8) {
        debug_assert!(self.contains(at), "{at} outside {}x{}", self.rows, self.cols);
        let idx = self.index(at);
        self.data[idx] = value;
    }

    /// Set the sample at `at` if it is inside the grid.
    ///
    /// Returns whether a sample was written. Used by drawing code that
    /// clips shapes against the grid edge.
    #[inline]
    pub fn set_clipped(&mut self, row: i64, col: i64, value: u8) -> bool {
        match (u32::try_from(row), u32::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.cols => {
                self.set_unchecked(Coord::new(r, c), value);
                true
            }
            _ => false,
        }
    }
}
