//! Boundary classification
//!
//! A pixel is on the boundary of its region if at least one in-bounds
//! neighbor carries a different sample value. The grid edge is not itself a
//! boundary: a region filling the whole grid has no boundary pixels.
//!
//! Classification reads neighbor labels, so it must run after growth of the
//! region has finished.

use crate::error::{RegionError, RegionResult};
use crate::grow::Region;
use crate::neighbors::{Connectivity, for_each_neighbor};
use edgeseg_core::{Coord, Grid};

/// Test whether `at` has a neighbor whose value differs from its own.
///
/// Stops at the first differing neighbor.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `at` is outside the grid.
pub fn is_boundary_pixel(grid: &Grid, at: Coord, connectivity: Connectivity) -> RegionResult<bool> {
    let label = grid.get(at).ok_or(RegionError::InvalidSeed {
        row: at.row,
        col: at.col,
    })?;
    Ok(has_foreign_neighbor(grid, at, label, connectivity))
}

fn has_foreign_neighbor(grid: &Grid, at: Coord, label: u8, connectivity: Connectivity) -> bool {
    !for_each_neighbor(grid, at, connectivity, |n| grid.get_unchecked(n) == label)
}

/// Filter `pixels` down to the ones adjacent to a different label.
///
/// All pixels are compared against the value at `pixels[0]`, so the slice
/// should hold one uniformly labeled region. Output keeps input order.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if any pixel is outside the grid.
/// An empty slice yields an empty boundary.
pub fn find_boundary(
    grid: &Grid,
    pixels: &[Coord],
    connectivity: Connectivity,
) -> RegionResult<Vec<Coord>> {
    let Some(&first) = pixels.first() else {
        return Ok(Vec::new());
    };
    let label = grid.get(first).ok_or(RegionError::InvalidSeed {
        row: first.row,
        col: first.col,
    })?;
    boundary_with_label(grid, pixels, label, connectivity)
}

/// Boundary pixels of a grown region, compared against `region.label`.
pub fn region_boundary(
    grid: &Grid,
    region: &Region,
    connectivity: Connectivity,
) -> RegionResult<Vec<Coord>> {
    boundary_with_label(grid, &region.pixels, region.label, connectivity)
}

fn boundary_with_label(
    grid: &Grid,
    pixels: &[Coord],
    label: u8,
    connectivity: Connectivity,
) -> RegionResult<Vec<Coord>> {
    let mut boundary = Vec::new();
    for &p in pixels {
        if !grid.contains(p) {
            return Err(RegionError::InvalidSeed {
                row: p.row,
                col: p.col,
            });
        }
        if has_foreign_neighbor(grid, p, label, connectivity) {
            boundary.push(p);
        }
    }
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_pixels(row0: u32, col0: u32, row1: u32, col1: u32) -> Vec<Coord> {
        (row0..row1)
            .flat_map(|r| (col0..col1).map(move |c| Coord::new(r, c)))
            .collect()
    }

    #[test]
    fn test_rectangle_perimeter() {
        for (h, w) in [(2u32, 2u32), (3, 5), (4, 4), (6, 2)] {
            let mut g = Grid::filled(h + 4, w + 4, 255).unwrap();
            g.fill_rect(2, 2, 2 + h, 2 + w, 170);
            let pixels = rect_pixels(2, 2, 2 + h, 2 + w);
            let b = find_boundary(&g, &pixels, Connectivity::EightWay).unwrap();
            assert_eq!(b.len() as u32, 2 * (h + w) - 4, "{h}x{w}");
        }
    }

    #[test]
    fn test_block_center_is_interior() {
        let mut g = Grid::new(10, 10).unwrap();
        g.fill_rect(4, 4, 7, 7, 170);
        assert!(!is_boundary_pixel(&g, Coord::new(5, 5), Connectivity::EightWay).unwrap());
        assert!(is_boundary_pixel(&g, Coord::new(4, 5), Connectivity::EightWay).unwrap());
    }

    #[test]
    fn test_grid_edge_is_not_boundary() {
        let g = Grid::filled(3, 3, 170).unwrap();
        let pixels: Vec<_> = g.coords().collect();
        let b = find_boundary(&g, &pixels, Connectivity::EightWay).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn test_diagonal_only_neighbor_check() {
        let mut g = Grid::new(5, 5).unwrap();
        g.fill_rect(1, 1, 4, 4, 170);
        let corner = Coord::new(1, 1);
        assert!(is_boundary_pixel(&g, corner, Connectivity::FourWay).unwrap());
        assert!(is_boundary_pixel(&g, corner, Connectivity::DiagonalOnly).unwrap());
        let center = Coord::new(2, 2);
        assert!(!is_boundary_pixel(&g, center, Connectivity::DiagonalOnly).unwrap());
    }

    #[test]
    fn test_region_boundary_uses_region_label() {
        let mut g = Grid::new(10, 10).unwrap();
        g.fill_rect(4, 4, 7, 7, 170);
        let region = Region {
            label: 170,
            pixels: rect_pixels(4, 4, 7, 7),
        };
        let b = region_boundary(&g, &region, Connectivity::EightWay).unwrap();
        assert_eq!(b.len(), 8);
        assert!(!b.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn test_out_of_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            is_boundary_pixel(&g, Coord::new(3, 0), Connectivity::EightWay),
            Err(RegionError::InvalidSeed { row: 3, col: 0 })
        );
        assert!(find_boundary(&g, &[Coord::new(0, 9)], Connectivity::EightWay).is_err());
        assert!(find_boundary(&g, &[], Connectivity::EightWay).unwrap().is_empty());
    }
}
