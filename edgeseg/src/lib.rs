//! edgeseg - Region segmentation of edge rasters
//!
//! Splits a single-channel edge image into connected regions of
//! non-edge pixels, labels each region in place, and annotates the
//! regions of interest with their boundary, centroid and mean radius.
//!
//! # Overview
//!
//! - [`Grid`] and [`Coord`] - the raster and its coordinates
//! - [`region`] - traversal, growing, boundaries, geometry and labeling
//! - [`FrameProcessor`] - the per-frame label, describe and annotate pipeline
//!
//! # Example
//!
//! ```
//! use edgeseg::region::SequentialLabels;
//! use edgeseg::{FrameOptions, FrameProcessor, Grid};
//!
//! // Edge raster: a closed 7x7 square outline on a dark background
//! let mut grid = Grid::new(12, 12).unwrap();
//! grid.fill_rect(2, 2, 9, 9, 255);
//! grid.fill_rect(3, 3, 8, 8, 0);
//!
//! let mut processor = FrameProcessor::new(FrameOptions::default(), SequentialLabels::new());
//! let report = processor.process(&mut grid).unwrap();
//!
//! // Outside and inside of the square; only the 25 pixel inside is annotated
//! assert_eq!(report.region_count, 2);
//! assert_eq!(report.descriptors.len(), 1);
//! assert_eq!(report.descriptors[0].size(), 25);
//! ```

pub mod frame;

// Re-export core types (primary data structures used everywhere)
pub use edgeseg_core::*;

// Re-export the region crate as a module to avoid name conflicts
pub use edgeseg_region as region;

pub use frame::{FrameOptions, FrameProcessor, FrameReport};
