//! edgeseg-region - Region segmentation of edge rasters
//!
//! This crate splits a single-channel grid into connected homogeneous
//! regions and measures them:
//!
//! - **Neighbor traversal** - 4-way, 8-way or diagonal-only neighbors
//! - **Region growing** - frontier flood fill with a pluggable predicate
//! - **Boundary classification** - pixels adjacent to a different label
//! - **Boundary tracing** - closed contour walks for polygon geometry
//! - **Geometry** - arithmetic and polygon centroids, mean radius
//! - **Labeling** - row-major seeding of every region with a fresh label
//! - **Description and annotation** - size filtering and drawing results
//!
//! # Examples
//!
//! ## Labeling and describing regions
//!
//! ```
//! use edgeseg_core::{Coord, Grid};
//! use edgeseg_region::{
//!     DescribeOptions, LabelOptions, SeedPredicate, SequentialLabels, describe_regions,
//!     label_regions,
//! };
//!
//! // A 10x10 edge raster with a 3x3 dark block in the middle
//! let mut grid = Grid::filled(10, 10, 255).unwrap();
//! grid.fill_rect(4, 4, 7, 7, 5);
//!
//! let options = LabelOptions::new().with_seed(SeedPredicate::Equal(5));
//! let regions = label_regions(&mut grid, &options, &mut SequentialLabels::new()).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].len(), 9);
//!
//! let described = describe_regions(
//!     &grid,
//!     regions,
//!     &DescribeOptions::new().with_size_range(1, 100),
//! )
//! .unwrap();
//! assert_eq!(described[0].boundary.len(), 8);
//! assert_eq!(described[0].centroid, Coord::new(5, 5));
//! assert_eq!(described[0].radius, 1);
//! ```
//!
//! ## Growing a single region
//!
//! ```
//! use edgeseg_core::{Coord, Grid};
//! use edgeseg_region::{Connectivity, Region};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! let region =
//!     Region::grow(&mut grid, Coord::new(2, 2), 200, |v| v < 32, Connectivity::FourWay).unwrap();
//! assert_eq!(region.len(), 25);
//! ```

pub mod annotate;
pub mod border;
pub mod describe;
pub mod error;
pub mod geometry;
pub mod grow;
pub mod label;
pub mod neighbors;
pub mod trace;

// Re-export core types
pub use edgeseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export traversal types and functions
pub use neighbors::{Connectivity, for_each_neighbor, neighbors};

// Re-export growing types and functions
pub use grow::{Region, grow_region};

// Re-export boundary functions
pub use border::{find_boundary, is_boundary_pixel, region_boundary};
pub use trace::{Direction, trace_boundary};

// Re-export geometry functions
pub use geometry::{POLYGON_EPSILON, centroid, mean_radius, polygon_centroid};

// Re-export labeling types and functions
pub use label::{
    DEFAULT_LABEL_HIGH, DEFAULT_LABEL_LOW, DEFAULT_SEED_THRESHOLD, LabelOptions, LabelRange,
    LabelSource, RandomLabels, SeedPredicate, SequentialLabels, label_regions,
};

// Re-export description types and functions
pub use describe::{
    CentroidMethod, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DescribeOptions, RegionDescriptor,
    describe_region, describe_regions,
};

// Re-export annotation types and functions
pub use annotate::{AnnotateOptions, annotate_regions, draw_circle, draw_marker, draw_points};
