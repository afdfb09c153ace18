//! Annotation rendering
//!
//! Draws region descriptors back into a grid for display: boundary
//! outlines, centroid crosses and approximate circles of the mean radius.
//! All shapes are clipped to the grid.

use crate::describe::RegionDescriptor;
use edgeseg_core::{Coord, Grid};

/// Options for annotation rendering
///
/// Each element is drawn only if its value is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Value written over boundary pixels
    pub outline: Option<u8>,
    /// Value of the cross drawn at the centroid
    pub marker: Option<u8>,
    /// Half-length of the centroid cross arms
    pub marker_size: u32,
    /// Value of the circle drawn at the mean radius
    pub circle: Option<u8>,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            outline: Some(0),
            marker: None,
            marker_size: 2,
            circle: None,
        }
    }
}

impl AnnotateOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline value
    pub fn with_outline(mut self, value: Option<u8>) -> Self {
        self.outline = value;
        self
    }

    /// Set the centroid marker value and arm length
    pub fn with_marker(mut self, value: Option<u8>, size: u32) -> Self {
        self.marker = value;
        self.marker_size = size;
        self
    }

    /// Set the circle value
    pub fn with_circle(mut self, value: Option<u8>) -> Self {
        self.circle = value;
        self
    }
}

/// Write `value` at every in-bounds point. Returns the number written.
pub fn draw_points(grid: &mut Grid, points: &[Coord], value: u8) -> usize {
    let mut written = 0;
    for &p in points {
        if grid.set(p, value).is_ok() {
            written += 1;
        }
    }
    written
}

/// Draw a `+` shaped cross centered at `center`.
///
/// Each arm extends `half` pixels from the center. Returns the number of
/// samples written.
pub fn draw_marker(grid: &mut Grid, center: Coord, half: u32, value: u8) -> usize {
    let (r, c) = (i64::from(center.row), i64::from(center.col));
    let h = i64::from(half);
    let mut written = usize::from(grid.set_clipped(r, c, value));
    for d in 1..=h {
        for (dr, dc) in [(-d, 0), (d, 0), (0, -d), (0, d)] {
            written += usize::from(grid.set_clipped(r + dr, c + dc, value));
        }
    }
    written
}

/// Draw a one pixel wide circle outline.
///
/// A sample is on the circle if its distance from `center` lies within
/// half a pixel of `radius`. A zero radius draws the center only. Returns
/// the number of samples written.
pub fn draw_circle(grid: &mut Grid, center: Coord, radius: u32, value: u8) -> usize {
    let (r, c) = (i64::from(center.row), i64::from(center.col));
    if radius == 0 {
        return usize::from(grid.set_clipped(r, c, value));
    }

    let r_outer = f64::from(radius) + 0.5;
    let r_inner = f64::from(radius) - 0.5;
    let (outer_sq, inner_sq) = (r_outer * r_outer, r_inner * r_inner);
    let extent = r_outer.ceil() as i64;

    let mut written = 0;
    for dy in -extent..=extent {
        for dx in -extent..=extent {
            let dist_sq = (dx * dx + dy * dy) as f64;
            if dist_sq >= inner_sq && dist_sq < outer_sq {
                written += usize::from(grid.set_clipped(r + dy, c + dx, value));
            }
        }
    }
    written
}

/// Render descriptors into `grid` according to `options`.
///
/// Outlines are drawn first, then circles, then markers, so markers stay
/// visible where shapes overlap. Returns the number of samples written.
pub fn annotate_regions(
    grid: &mut Grid,
    descriptors: &[RegionDescriptor],
    options: &AnnotateOptions,
) -> usize {
    let mut written = 0;
    if let Some(v) = options.outline {
        for d in descriptors {
            written += draw_points(grid, &d.boundary, v);
        }
    }
    if let Some(v) = options.circle {
        for d in descriptors {
            written += draw_circle(grid, d.centroid, d.radius, v);
        }
    }
    if let Some(v) = options.marker {
        for d in descriptors {
            written += draw_marker(grid, d.centroid, options.marker_size, v);
        }
    }
    written
}
