//! Ordered boundary tracing
//!
//! The boundary classifier in [`crate::border`] returns edge pixels in the
//! order they appear in the region list, which is not a walk around the
//! region. The polygon centroid needs a closed walk, so this module traces
//! the outer contour with Moore-neighbor tracing.
//!
//! The walk starts at the first region pixel in raster order and moves
//! clockwise (on screen, rows growing downward). It stops when it is about
//! to repeat its first step (Jacob's stopping criterion), so pixels on
//! one-pixel-wide necks may appear more than once.

use crate::error::{RegionError, RegionResult};
use edgeseg_core::Coord;
use std::collections::HashSet;

/// Direction between 8-adjacent pixels, clockwise from West
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// West (0, -1)
    West = 0,
    /// Northwest (-1, -1)
    NorthWest = 1,
    /// North (-1, 0)
    North = 2,
    /// Northeast (-1, 1)
    NorthEast = 3,
    /// East (0, 1)
    East = 4,
    /// Southeast (1, 1)
    SouthEast = 5,
    /// South (1, 0)
    South = 6,
    /// Southwest (1, -1)
    SouthWest = 7,
}

impl Direction {
    /// Row offset for this direction
    #[inline]
    pub fn drow(self) -> i32 {
        ROWTAB[self as usize]
    }

    /// Column offset for this direction
    #[inline]
    pub fn dcol(self) -> i32 {
        COLTAB[self as usize]
    }

    /// Get direction from row/column offsets
    pub fn from_offset(drow: i32, dcol: i32) -> Option<Self> {
        if drow.abs() > 1 || dcol.abs() > 1 {
            return None;
        }
        let idx = DIRTAB[(1 + drow) as usize][(1 + dcol) as usize];
        if idx < 0 {
            None
        } else {
            Some(Self::from_index(idx as usize))
        }
    }

    /// The direction `steps` positions further clockwise
    #[inline]
    pub fn clockwise(self, steps: usize) -> Self {
        Self::from_index(self as usize + steps)
    }

    #[inline]
    fn from_index(idx: usize) -> Self {
        match idx % 8 {
            0 => Direction::West,
            1 => Direction::NorthWest,
            2 => Direction::North,
            3 => Direction::NorthEast,
            4 => Direction::East,
            5 => Direction::SouthEast,
            6 => Direction::South,
            _ => Direction::SouthWest,
        }
    }
}

/// Row offset for each direction
const ROWTAB: [i32; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Column offset for each direction
const COLTAB: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];

/// Direction lookup table: DIRTAB[1+drow][1+dcol] gives direction index
const DIRTAB: [[i32; 3]; 3] = [[1, 2, 3], [0, -1, 4], [7, 6, 5]];

/// Find the next contour pixel clockwise from the backtrack direction.
///
/// Returns the pixel and the backtrack direction to use from it, or `None`
/// if `cur` has no neighbor in the region.
fn next_border_pixel(
    members: &HashSet<Coord>,
    cur: Coord,
    back: Direction,
) -> Option<(Coord, Direction)> {
    for k in 1..8 {
        let dir = back.clockwise(k);
        let Some(next) = cur.offset(dir.drow(), dir.dcol()) else {
            continue;
        };
        if members.contains(&next) {
            // The last empty cell examined becomes the new backtrack cell
            let prev = back.clockwise(k - 1);
            let new_back =
                Direction::from_offset(prev.drow() - dir.drow(), prev.dcol() - dir.dcol())?;
            return Some((next, new_back));
        }
    }
    None
}

/// Trace the outer contour of a region as a closed walk.
///
/// `pixels` is the set of region pixels (order and duplicates do not
/// matter). The result starts at the raster-first pixel, lists contour
/// pixels in clockwise walk order, and does not repeat the start at the
/// end. Consecutive entries, and the last and first entry, are 8-adjacent.
///
/// # Errors
///
/// Returns [`RegionError::EmptyPointSet`] if `pixels` is empty.
pub fn trace_boundary(pixels: &[Coord]) -> RegionResult<Vec<Coord>> {
    let start = *pixels.iter().min().ok_or(RegionError::EmptyPointSet)?;
    let members: HashSet<Coord> = pixels.iter().copied().collect();

    // Nothing in the start row lies west of the raster-first pixel
    let mut back = Direction::West;
    let mut cur = start;
    let mut contour = vec![start];
    let limit = 4 * members.len() + 4;

    while let Some((next, new_back)) = next_border_pixel(&members, cur, back) {
        if cur == start && contour.len() > 1 && next == contour[1] {
            break;
        }
        contour.push(next);
        cur = next;
        back = new_back;
        if contour.len() > limit {
            log::warn!("boundary trace from {start} did not close after {limit} steps");
            break;
        }
    }

    if contour.len() > 1 && contour.last() == Some(&start) {
        contour.pop();
    }
    log::trace!("traced {} contour pixels from {start}", contour.len());
    Ok(contour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(row0: u32, col0: u32, row1: u32, col1: u32) -> Vec<Coord> {
        (row0..row1)
            .flat_map(|r| (col0..col1).map(move |c| Coord::new(r, c)))
            .collect()
    }

    fn assert_closed_chain(contour: &[Coord]) {
        for i in 0..contour.len() {
            let a = contour[i];
            let b = contour[(i + 1) % contour.len()];
            assert_eq!(a.chebyshev(b), 1, "{a} -> {b}");
        }
    }

    #[test]
    fn test_direction_tables() {
        for d in (0..8).map(Direction::from_index) {
            assert_eq!(Direction::from_offset(d.drow(), d.dcol()), Some(d));
        }
        assert_eq!(Direction::from_offset(0, 0), None);
        assert_eq!(Direction::from_offset(2, 0), None);
        assert_eq!(Direction::West.clockwise(2), Direction::North);
        assert_eq!(Direction::SouthWest.clockwise(1), Direction::West);
    }

    #[test]
    fn test_trace_square() {
        let contour = trace_boundary(&rect(4, 4, 7, 7)).unwrap();
        let expected: Vec<Coord> = [
            (4, 4),
            (4, 5),
            (4, 6),
            (5, 6),
            (6, 6),
            (6, 5),
            (6, 4),
            (5, 4),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(contour, expected);
    }

    #[test]
    fn test_trace_single_pixel() {
        let contour = trace_boundary(&[Coord::new(3, 3)]).unwrap();
        assert_eq!(contour, vec![Coord::new(3, 3)]);
    }

    #[test]
    fn test_trace_line_walks_back() {
        let contour = trace_boundary(&rect(0, 0, 1, 3)).unwrap();
        let expected: Vec<Coord> = [(0, 0), (0, 1), (0, 2), (0, 1)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(contour, expected);
        assert_closed_chain(&contour);
    }

    #[test]
    fn test_trace_ignores_interior() {
        let pixels = rect(0, 0, 5, 6);
        let contour = trace_boundary(&pixels).unwrap();
        assert_eq!(contour.len(), 2 * (5 + 6) - 4);
        assert!(!contour.contains(&Coord::new(2, 2)));
        assert_closed_chain(&contour);
    }

    #[test]
    fn test_trace_l_shape() {
        // ##.
        // ##.
        // ###
        let mut pixels = rect(0, 0, 3, 2);
        pixels.push(Coord::new(2, 2));
        let contour = trace_boundary(&pixels).unwrap();
        assert_eq!(contour[0], Coord::new(0, 0));
        assert!(contour.contains(&Coord::new(2, 2)));
        assert_closed_chain(&contour);
    }

    #[test]
    fn test_trace_empty() {
        assert_eq!(trace_boundary(&[]), Err(RegionError::EmptyPointSet));
    }
}
