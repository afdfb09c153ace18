//! Region growing
//!
//! Frontier-based flood fill over an 8-bit grid. The coordinate list that
//! holds the region doubles as the work queue: a cursor walks the list
//! while newly accepted neighbors are appended behind it. Growth stops when
//! the cursor catches up with the end of the list.
//!
//! Accepted pixels are overwritten with the region label at the moment they
//! are appended. Because the label never satisfies the inclusion predicate,
//! the overwrite is also the "visited" mark and no pixel is queued twice.

use crate::error::{RegionError, RegionResult};
use crate::neighbors::{Connectivity, neighbors};
use edgeseg_core::{Coord, Grid};

/// A grown region: its label and the pixels carrying it.
///
/// `pixels` is in acceptance order, seeds first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Label written into the grid for every pixel of the region
    pub label: u8,
    /// Pixels of the region, each exactly once
    pub pixels: Vec<Coord>,
}

impl Region {
    /// Grow a region from a single seed.
    ///
    /// See [`grow_region`] for the algorithm and error conditions.
    pub fn grow<P>(
        grid: &mut Grid,
        seed: Coord,
        label: u8,
        accept: P,
        connectivity: Connectivity,
    ) -> RegionResult<Self>
    where
        P: Fn(u8) -> bool,
    {
        let mut pixels = vec![seed];
        grow_region(grid, label, accept, connectivity, &mut pixels)?;
        Ok(Self { label, pixels })
    }

    /// Number of pixels in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the region has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Expand `pixels` in place by flood fill.
///
/// Every seed in `pixels` is first marked with `label`. Then each pixel in
/// the list, in order, has its neighbors examined; a neighbor whose current
/// sample satisfies `accept` is overwritten with `label` and appended.
///
/// Seeds are expected to be distinct.
///
/// # Arguments
///
/// * `grid` - Grid to label in place
/// * `label` - Value written into accepted pixels
/// * `accept` - Inclusion predicate over the current sample value
/// * `connectivity` - Which neighbors are considered adjacent
/// * `pixels` - Seed list on entry, full region on return
///
/// # Returns
///
/// The number of pixels appended beyond the seeds.
///
/// # Errors
///
/// - [`RegionError::EmptySeeds`] if `pixels` is empty
/// - [`RegionError::InvalidSeed`] if a seed lies outside the grid
/// - [`RegionError::LabelAccepted`] if `accept(label)` is true, which would
///   make the fill revisit its own output forever
pub fn grow_region<P>(
    grid: &mut Grid,
    label: u8,
    accept: P,
    connectivity: Connectivity,
    pixels: &mut Vec<Coord>,
) -> RegionResult<usize>
where
    P: Fn(u8) -> bool,
{
    if pixels.is_empty() {
        return Err(RegionError::EmptySeeds);
    }
    if let Some(bad) = pixels.iter().find(|c| !grid.contains(**c)) {
        return Err(RegionError::InvalidSeed {
            row: bad.row,
            col: bad.col,
        });
    }
    if accept(label) {
        return Err(RegionError::LabelAccepted { label });
    }

    let seeds = pixels.len();
    for &seed in pixels.iter() {
        grid.set_unchecked(seed, label);
    }

    let mut cursor = 0;
    while cursor < pixels.len() {
        let current = pixels[cursor];
        for n in neighbors(grid, current, connectivity) {
            if accept(grid.get_unchecked(n)) {
                grid.set_unchecked(n, label);
                pixels.push(n);
            }
        }
        cursor += 1;
    }

    Ok(pixels.len() - seeds)
}
