//! edgeseg Core - Basic data structures for edge-raster segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the edgeseg workspace:
//!
//! - [`Grid`] - a `rows × cols` raster of 8-bit samples, mutated in place
//!   by region labeling and annotation
//! - [`Coord`] - a `(row, col)` position, used both as a grid index and as
//!   a geometric point
//!
//! # Example
//!
//! ```
//! use edgeseg_core::{Coord, Grid};
//!
//! let mut grid = Grid::new(10, 10).unwrap();
//! grid.fill_rect(4, 4, 7, 7, 5);
//! assert_eq!(grid.get(Coord::new(5, 5)), Some(5));
//! assert_eq!(grid.count_value(5), 9);
//! ```

pub mod coord;
pub mod error;
pub mod grid;

pub use coord::Coord;
pub use error::{Error, Result};
pub use grid::Grid;
