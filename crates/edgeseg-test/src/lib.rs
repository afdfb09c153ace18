//! edgeseg-test - Regression test harness for edgeseg
//!
//! This crate provides the `RegParams` check tracker used by the
//! `tests/*_reg.rs` files across the workspace, together with small grid
//! fixtures so tests can describe inputs as ASCII art.
//!
//! # Usage
//!
//! ```
//! use edgeseg_test::{RegParams, grid_from_art};
//!
//! let grid = grid_from_art(&[
//!     "#####",
//!     "#...#",
//!     "#####",
//! ])
//! .unwrap();
//!
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(3.0, grid.count_value(0) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to dump grids to stderr

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use edgeseg_core::Grid;
use std::fmt::Write as _;

/// Sample value used for `#` in ASCII-art fixtures (an edge pixel).
pub const EDGE: u8 = 255;

/// Build a grid from ASCII art.
///
/// - `.` is 0 (dark, qualifying background)
/// - `#` is [`EDGE`] (255)
/// - `0`..`9` are the digit value
pub fn grid_from_art(lines: &[&str]) -> TestResult<Grid> {
    let mut rows = Vec::with_capacity(lines.len());
    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (c, ch) in line.chars().enumerate() {
            let v = match ch {
                '.' => 0,
                '#' => EDGE,
                d if d.is_ascii_digit() => d as u8 - b'0',
                _ => return Err(TestError::FixtureChar { ch, row: r, col: c }),
            };
            row.push(v);
        }
        rows.push(row);
    }
    Ok(Grid::from_rows(&rows)?)
}

/// Build a `rows × cols` grid of `outside` with the rectangle
/// `[row0, row1) × [col0, col1)` set to `inside`.
pub fn block_grid(
    rows: u32,
    cols: u32,
    (row0, col0, row1, col1): (u32, u32, u32, u32),
    inside: u8,
    outside: u8,
) -> TestResult<Grid> {
    let mut grid = Grid::filled(rows, cols, outside)?;
    grid.fill_rect(row0, col0, row1, col1, inside);
    Ok(grid)
}

/// Render a grid as rows of space separated hex bytes.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 3);
    for row in 0..grid.rows() {
        if let Some(samples) = grid.row(row) {
            for (i, v) in samples.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{v:02x}");
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgeseg_core::Coord;

    #[test]
    fn test_grid_from_art() {
        let g = grid_from_art(&["#.5", "..#"]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.get(Coord::new(0, 0)), Some(EDGE));
        assert_eq!(g.get(Coord::new(0, 2)), Some(5));
        assert_eq!(g.get(Coord::new(1, 1)), Some(0));
    }

    #[test]
    fn test_grid_from_art_bad_char() {
        let err = grid_from_art(&["..x"]).unwrap_err();
        assert!(matches!(
            err,
            TestError::FixtureChar {
                ch: 'x',
                row: 0,
                col: 2
            }
        ));
    }

    #[test]
    fn test_block_grid() {
        let g = block_grid(10, 10, (4, 4, 7, 7), 5, 0).unwrap();
        assert_eq!(g.count_value(5), 9);
        assert_eq!(g.get(Coord::new(4, 4)), Some(5));
        assert_eq!(g.get(Coord::new(7, 7)), Some(0));
    }

    #[test]
    fn test_render_grid() {
        let g = Grid::from_rows(&[[0u8, 255], [16, 1]]).unwrap();
        assert_eq!(render_grid(&g), "00 ff\n10 01\n");
    }
}
