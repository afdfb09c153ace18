//! Region description
//!
//! Turns grown regions into annotation-ready descriptors: boundary subset,
//! centroid and mean radius. Regions outside the configured size window are
//! dropped here but stay labeled in the grid, so tiny noise specks and the
//! large background region never get annotated.

use crate::border::region_boundary;
use crate::error::{RegionError, RegionResult};
use crate::geometry::{centroid, mean_radius, polygon_centroid};
use crate::grow::Region;
use crate::neighbors::Connectivity;
use crate::trace::trace_boundary;
use edgeseg_core::{Coord, Grid};

/// Default smallest annotated region, in pixels.
pub const DEFAULT_MIN_SIZE: usize = 10;

/// Default largest annotated region, in pixels.
pub const DEFAULT_MAX_SIZE: usize = 50;

/// How the centroid of a region is estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentroidMethod {
    /// Mean of all region pixel coordinates
    #[default]
    Arithmetic,
    /// Shoelace centroid of the traced outer contour
    Polygon,
}

/// Options for region description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Smallest region (inclusive) that is described
    pub min_size: usize,
    /// Largest region (inclusive) that is described
    pub max_size: usize,
    /// Centroid estimator
    pub centroid: CentroidMethod,
    /// Neighbor relation used for boundary classification
    pub connectivity: Connectivity,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            centroid: CentroidMethod::Arithmetic,
            connectivity: Connectivity::EightWay,
        }
    }
}

impl DescribeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive size window
    pub fn with_size_range(mut self, min_size: usize, max_size: usize) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the centroid estimator
    pub fn with_centroid(mut self, method: CentroidMethod) -> Self {
        self.centroid = method;
        self
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Whether a region of `size` pixels falls inside the window.
    #[inline]
    pub fn admits(&self, size: usize) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }

    /// Check the size window.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `min_size > max_size`.
    pub fn validate(&self) -> RegionResult<()> {
        if self.min_size > self.max_size {
            return Err(RegionError::InvalidParameters(format!(
                "min size {} exceeds max size {}",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}

/// Geometry of one labeled region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDescriptor {
    /// Label of the region in the grid
    pub label: u8,
    /// All region pixels, in growth order
    pub pixels: Vec<Coord>,
    /// Pixels adjacent to a different label, in growth order
    pub boundary: Vec<Coord>,
    /// Estimated center
    pub centroid: Coord,
    /// Mean distance from the centroid to the boundary
    pub radius: u32,
}

impl RegionDescriptor {
    /// Number of pixels in the region.
    #[inline]
    pub fn size(&self) -> usize {
        self.pixels.len()
    }
}

/// Describe a single region regardless of its size.
///
/// A region with no differently labeled neighbor (one covering the whole
/// grid) has an empty `boundary`; its radius is then measured to the traced
/// outer contour instead.
///
/// # Errors
///
/// Returns [`RegionError::EmptyPointSet`] for an empty region, or
/// [`RegionError::InvalidSeed`] if a region pixel is outside the grid.
pub fn describe_region(
    grid: &Grid,
    region: Region,
    options: &DescribeOptions,
) -> RegionResult<RegionDescriptor> {
    if region.is_empty() {
        return Err(RegionError::EmptyPointSet);
    }
    let boundary = region_boundary(grid, &region, options.connectivity)?;

    let mut contour = None;
    let center = match options.centroid {
        CentroidMethod::Arithmetic => centroid(&region.pixels)?,
        CentroidMethod::Polygon => {
            let traced = trace_boundary(&region.pixels)?;
            let c = polygon_centroid(&traced)?;
            contour = Some(traced);
            c
        }
    };

    let radius = if boundary.is_empty() {
        let traced = match contour {
            Some(t) => t,
            None => trace_boundary(&region.pixels)?,
        };
        mean_radius(center, &traced)?
    } else {
        mean_radius(center, &boundary)?
    };

    Ok(RegionDescriptor {
        label: region.label,
        pixels: region.pixels,
        boundary,
        centroid: center,
        radius,
    })
}

/// Describe every region whose size falls inside the options' window.
///
/// Consumes the regions; the ones outside the window are discarded.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for an inverted size window,
/// or any error of [`describe_region`].
pub fn describe_regions(
    grid: &Grid,
    regions: Vec<Region>,
    options: &DescribeOptions,
) -> RegionResult<Vec<RegionDescriptor>> {
    options.validate()?;
    let total = regions.len();
    let described = regions
        .into_iter()
        .filter(|r| options.admits(r.len()))
        .map(|r| describe_region(grid, r, options))
        .collect::<RegionResult<Vec<_>>>()?;
    log::debug!(
        "described {} of {} regions (size window [{}, {}])",
        described.len(),
        total,
        options.min_size,
        options.max_size
    );
    Ok(described)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_region(
        grid: &mut Grid,
        row0: u32,
        col0: u32,
        row1: u32,
        col1: u32,
        label: u8,
    ) -> Region {
        grid.fill_rect(row0, col0, row1, col1, label);
        let pixels = (row0..row1)
            .flat_map(|r| (col0..col1).map(move |c| Coord::new(r, c)))
            .collect();
        Region { label, pixels }
    }

    #[test]
    fn test_describe_block() {
        let mut g = Grid::new(10, 10).unwrap();
        let region = block_region(&mut g, 4, 4, 7, 7, 170);
        let d = describe_region(&g, region, &DescribeOptions::default()).unwrap();
        assert_eq!(d.size(), 9);
        assert_eq!(d.boundary.len(), 8);
        assert_eq!(d.centroid, Coord::new(5, 5));
        assert_eq!(d.radius, 1);
    }

    #[test]
    fn test_describe_polygon_centroid() {
        let mut g = Grid::new(20, 20).unwrap();
        let region = block_region(&mut g, 2, 3, 9, 14, 170);
        let opts = DescribeOptions::new().with_centroid(CentroidMethod::Polygon);
        let d = describe_region(&g, region, &opts).unwrap();
        assert_eq!(d.centroid, Coord::new(5, 8));
    }

    #[test]
    fn test_describe_whole_grid_region() {
        let mut g = Grid::new(5, 5).unwrap();
        let region = block_region(&mut g, 0, 0, 5, 5, 170);
        let d = describe_region(&g, region, &DescribeOptions::default()).unwrap();
        assert!(d.boundary.is_empty());
        assert_eq!(d.centroid, Coord::new(2, 2));
        assert_eq!(d.radius, 2);
    }

    #[test]
    fn test_size_filter() {
        let mut g = Grid::new(20, 20).unwrap();
        let small = block_region(&mut g, 0, 0, 2, 2, 170);
        let medium = block_region(&mut g, 5, 5, 9, 9, 171);
        let large = block_region(&mut g, 10, 10, 20, 20, 172);
        let d = describe_regions(&g, vec![small, medium, large], &DescribeOptions::default())
            .unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].label, 171);
        assert_eq!(d[0].size(), 16);
        // Filtered regions keep their labels
        assert_eq!(g.count_value(170), 4);
        assert_eq!(g.count_value(172), 100);
    }

    #[test]
    fn test_inverted_window() {
        let g = Grid::new(2, 2).unwrap();
        let opts = DescribeOptions::new().with_size_range(10, 5);
        assert!(describe_regions(&g, Vec::new(), &opts).is_err());
    }

    #[test]
    fn test_empty_region() {
        let g = Grid::new(2, 2).unwrap();
        let region = Region {
            label: 170,
            pixels: Vec::new(),
        };
        assert_eq!(
            describe_region(&g, region, &DescribeOptions::default()),
            Err(RegionError::EmptyPointSet)
        );
    }
}
