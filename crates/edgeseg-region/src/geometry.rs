//! Region geometry
//!
//! Integer estimators used to annotate regions:
//!
//! - [`centroid`] - mean of the coordinates (center of mass of the pixels)
//! - [`polygon_centroid`] - area-weighted centroid of a closed contour
//!   walk, via the shoelace formula
//! - [`mean_radius`] - mean Euclidean distance from a center to a set of
//!   boundary pixels
//!
//! All results are rounded to the nearest integer, halves away from zero.
//! The coordinates are treated as points `(x, y) = (row, col)`.

use crate::error::{RegionError, RegionResult};
use edgeseg_core::Coord;

/// Signed areas at or below this magnitude are treated as degenerate.
pub const POLYGON_EPSILON: f64 = 1e-9;

fn to_coord(row: f64, col: f64) -> RegionResult<Coord> {
    let (row, col) = (row.round(), col.round());
    let range = 0.0..=f64::from(u32::MAX);
    if !range.contains(&row) || !range.contains(&col) {
        return Err(RegionError::InvalidParameters(format!(
            "centroid ({row}, {col}) outside the coordinate range"
        )));
    }
    Ok(Coord::new(row as u32, col as u32))
}

/// Arithmetic centroid of a point set.
///
/// # Errors
///
/// Returns [`RegionError::EmptyPointSet`] if `points` is empty.
pub fn centroid(points: &[Coord]) -> RegionResult<Coord> {
    if points.is_empty() {
        return Err(RegionError::EmptyPointSet);
    }
    let (sum_row, sum_col) = points.iter().fold((0u64, 0u64), |(r, c), p| {
        (r + u64::from(p.row), c + u64::from(p.col))
    });
    let n = points.len() as f64;
    to_coord(sum_row as f64 / n, sum_col as f64 / n)
}

/// Polygon centroid of a closed contour walk (shoelace formula).
///
/// `ordered` must list contour pixels so that each entry is 8-adjacent to
/// the next and the last is 8-adjacent to the first, as produced by
/// [`trace_boundary`](crate::trace::trace_boundary). Orientation does not
/// matter.
///
/// A contour with zero signed area (a single pixel or a one-pixel-thick
/// line walked out and back) has no polygon centroid; the arithmetic
/// centroid of the walk is returned instead.
///
/// # Errors
///
/// - [`RegionError::EmptyPointSet`] if `ordered` is empty
/// - [`RegionError::BrokenBoundary`] if two consecutive entries are not
///   8-adjacent
pub fn polygon_centroid(ordered: &[Coord]) -> RegionResult<Coord> {
    if ordered.is_empty() {
        return Err(RegionError::EmptyPointSet);
    }
    let n = ordered.len();

    let mut area2 = 0i64;
    let mut sum_x = 0i64;
    let mut sum_y = 0i64;
    for i in 0..n {
        let a = ordered[i];
        let b = ordered[(i + 1) % n];
        if a.chebyshev(b) > 1 {
            return Err(RegionError::BrokenBoundary { index: i });
        }
        let (xa, ya) = (i64::from(a.row), i64::from(a.col));
        let (xb, yb) = (i64::from(b.row), i64::from(b.col));
        let cross = xa * yb - xb * ya;
        area2 += cross;
        sum_x += (xa + xb) * cross;
        sum_y += (ya + yb) * cross;
    }

    if (area2 as f64).abs() <= POLYGON_EPSILON {
        log::warn!("contour of {n} pixels has zero area, using arithmetic centroid");
        return centroid(ordered);
    }

    // Both sums and the area flip sign with the walk direction
    let denom = 3.0 * area2 as f64;
    to_coord(sum_x as f64 / denom, sum_y as f64 / denom)
}

/// Mean distance from `center` to each boundary pixel, rounded.
///
/// # Errors
///
/// Returns [`RegionError::EmptyPointSet`] if `boundary` is empty.
pub fn mean_radius(center: Coord, boundary: &[Coord]) -> RegionResult<u32> {
    if boundary.is_empty() {
        return Err(RegionError::EmptyPointSet);
    }
    let total: f64 = boundary.iter().map(|&p| center.distance(p)).sum();
    Ok((total / boundary.len() as f64).round() as u32)
}
