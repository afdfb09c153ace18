//! Grid - the single-channel 8-bit sample raster
//!
//! A `Grid` is the unit of work for segmentation: an upstream edge detector
//! or threshold step fills one per frame, the region crate labels it in
//! place, and a display layer consumes the result.
//!
//! # Layout
//!
//! - Samples are stored row-major in one flat `Vec<u8>`
//! - Sample `(row, col)` lives at index `row * cols + col`
//! - A grid with zero rows or zero columns is valid and has no samples

mod access;

use crate::coord::Coord;
use crate::error::{Error, Result};

/// A `rows × cols` raster of 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    data: Vec<u8>,
}

impl Grid {
    /// Create a grid with every sample set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows * cols` overflows `usize`.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        Self::filled(rows, cols, 0)
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(rows: u32, cols: u32, value: u8) -> Result<Self> {
        let len = Self::element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::element_count(rows, cols)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from nested rows.
    ///
    /// An empty slice yields a `0 × 0` grid.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionOverflow`] if the row count or row length does
    ///   not fit in `u32`
    /// - [`Error::RaggedRows`] if the rows differ in length
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let (nrows, ncols) = Self::dims_from_lengths(rows.len(), cols)?;
        let mut data = Vec::with_capacity(Self::element_count(nrows, ncols)?);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Self::from_vec(nrows, ncols, data)
    }

    fn dims_from_lengths(rows: usize, cols: usize) -> Result<(u32, u32)> {
        match (u32::try_from(rows), u32::try_from(cols)) {
            (Ok(r), Ok(c)) => Ok((r, c)),
            _ => Err(Error::DimensionOverflow { rows, cols }),
        }
    }

    fn element_count(rows: u32, cols: u32) -> Result<usize> {
        (rows as usize)
            .checked_mul(cols as usize)
            .ok_or(Error::InvalidDimension { rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the grid has no samples (zero rows or zero columns).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Samples of one row, or `None` if `row` is out of range.
    pub fn row(&self, row: u32) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.data[start..start + self.cols as usize])
    }

    /// Whether `at` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// The in-bounds coordinate at `at + (drow, dcol)`, if any.
    #[inline]
    pub fn neighbor(&self, at: Coord, drow: i32, dcol: i32) -> Option<Coord> {
        at.offset(drow, dcol).filter(|c| self.contains(*c))
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Count samples equal to `value`.
    pub fn count_value(&self, value: u8) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    /// Count samples satisfying `pred`.
    pub fn count_matching(&self, pred: impl Fn(u8) -> bool) -> usize {
        self.data.iter().filter(|&&v| pred(v)).count()
    }

    /// Set the samples in `[row0, row1) × [col0, col1)` to `value`.
    ///
    /// The rectangle is clipped to the grid.
    pub fn fill_rect(&mut self, row0: u32, col0: u32, row1: u32, col1: u32, value: u8) {
        let row1 = row1.min(self.rows);
        let col1 = col1.min(self.cols);
        if row0 >= row1 || col0 >= col1 {
            return;
        }
        let cols = self.cols as usize;
        for row in row0..row1 {
            let start = row as usize * cols;
            self.data[start + col0 as usize..start + col1 as usize].fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_dims() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert!(g.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_dims() {
        let g = Grid::new(0, 5).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.coords().count(), 0);
        let g = Grid::from_rows::<[u8; 0]>(&[]).unwrap();
        assert_eq!((g.rows(), g.cols()), (0, 0));
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Grid::from_vec(2, 2, vec![0; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::DataLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_dims_overflow_reports_lengths() {
        let too_long = u32::MAX as usize + 1;
        assert_eq!(Grid::dims_from_lengths(3, 7), Ok((3, 7)));
        assert_eq!(
            Grid::dims_from_lengths(too_long, 2),
            Err(Error::DimensionOverflow {
                rows: too_long,
                cols: 2
            })
        );
        assert_eq!(
            Grid::dims_from_lengths(1, too_long),
            Err(Error::DimensionOverflow {
                rows: 1,
                cols: too_long
            })
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Grid::from_rows(&[vec![1u8, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::RaggedRows { row: 1, .. }));
    }

    #[test]
    fn test_neighbor_clipping() {
        let g = Grid::new(2, 2).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(g.neighbor(c, -1, -1), Some(Coord::new(0, 0)));
        assert_eq!(g.neighbor(c, 0, 1), None);
        assert_eq!(g.neighbor(Coord::new(0, 0), -1, 0), None);
    }

    #[test]
    fn test_coords_row_major() {
        let g = Grid::new(2, 2).unwrap();
        let v: Vec<_> = g.coords().collect();
        assert_eq!(
            v,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut g = Grid::new(4, 4).unwrap();
        g.fill_rect(2, 2, 10, 10, 7);
        assert_eq!(g.count_value(7), 4);
        assert_eq!(g.row(3), Some(&[0u8, 0, 7, 7][..]));
        g.fill_rect(3, 3, 1, 1, 9);
        assert_eq!(g.count_value(9), 0);
    }
}
