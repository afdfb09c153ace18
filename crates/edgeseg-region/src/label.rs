//! Region labeling driver
//!
//! Scans a grid in row-major order and grows a region from every pixel
//! that still satisfies the seed predicate, writing a freshly drawn label
//! into each region. A labeled pixel never satisfies the predicate again
//! (the label range is validated to be disjoint from it), which is what
//! stops the scan from reseeding a region it has already grown.

use crate::error::{RegionError, RegionResult};
use crate::grow::Region;
use crate::neighbors::Connectivity;
use edgeseg_core::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default seed threshold: samples below this are region material.
pub const DEFAULT_SEED_THRESHOLD: u8 = 32;

/// Default lowest region label.
pub const DEFAULT_LABEL_LOW: u8 = 160;

/// Default highest region label.
pub const DEFAULT_LABEL_HIGH: u8 = 192;

/// Which unlabeled samples qualify as region material
#[derive(Debug, Clone, Copy)]
pub enum SeedPredicate {
    /// `value < threshold`
    Below(u8),
    /// `value == v`
    Equal(u8),
    /// `low <= value <= high`
    Between(u8, u8),
    /// Arbitrary pure function of the sample value
    Custom(fn(u8) -> bool),
}

impl Default for SeedPredicate {
    fn default() -> Self {
        SeedPredicate::Below(DEFAULT_SEED_THRESHOLD)
    }
}

impl SeedPredicate {
    /// Evaluate the predicate on a sample value.
    #[inline]
    pub fn accepts(&self, value: u8) -> bool {
        match *self {
            SeedPredicate::Below(t) => value < t,
            SeedPredicate::Equal(v) => value == v,
            SeedPredicate::Between(lo, hi) => (lo..=hi).contains(&value),
            SeedPredicate::Custom(f) => f(value),
        }
    }
}

/// Inclusive range that region labels are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRange {
    /// Lowest label
    pub low: u8,
    /// Highest label
    pub high: u8,
}

impl Default for LabelRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_LABEL_LOW,
            high: DEFAULT_LABEL_HIGH,
        }
    }
}

impl LabelRange {
    /// Create a label range.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `low > high`.
    pub fn new(low: u8, high: u8) -> RegionResult<Self> {
        if low > high {
            return Err(RegionError::InvalidParameters(format!(
                "label range [{low}, {high}] is inverted"
            )));
        }
        Ok(Self { low, high })
    }

    /// All labels in the range.
    pub fn values(self) -> RangeInclusive<u8> {
        self.low..=self.high
    }

    /// Whether `label` is in the range.
    pub fn contains(self, label: u8) -> bool {
        self.values().contains(&label)
    }
}

/// Supplier of region labels.
///
/// Implementations must return a value inside `range`.
pub trait LabelSource {
    /// Draw the label for the next region.
    fn next_label(&mut self, range: LabelRange) -> u8;
}

/// Labels drawn uniformly at random from the range.
#[derive(Debug, Clone)]
pub struct RandomLabels<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomLabels<R> {
    /// Wrap an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomLabels<StdRng> {
    /// Deterministic labels, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Labels seeded from the system clock.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }
}

impl<R: Rng> LabelSource for RandomLabels<R> {
    fn next_label(&mut self, range: LabelRange) -> u8 {
        self.rng.random_range(range.values())
    }
}

/// Labels taken in order from the range, wrapping at the top.
#[derive(Debug, Clone, Default)]
pub struct SequentialLabels {
    next: usize,
}

impl SequentialLabels {
    /// Start at the bottom of the range.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LabelSource for SequentialLabels {
    fn next_label(&mut self, range: LabelRange) -> u8 {
        let span = usize::from(range.high - range.low) + 1;
        let label = range.low + (self.next % span) as u8;
        self.next = self.next.wrapping_add(1);
        label
    }
}

/// Options for region labeling
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Which unlabeled samples seed and join regions
    pub seed: SeedPredicate,
    /// Range labels are drawn from; must be disjoint from `seed`
    pub labels: LabelRange,
    /// Neighbor relation used while growing
    pub connectivity: Connectivity,
}

impl LabelOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed predicate
    pub fn with_seed(mut self, seed: SeedPredicate) -> Self {
        self.seed = seed;
        self
    }

    /// Set the label range
    pub fn with_labels(mut self, labels: LabelRange) -> Self {
        self.labels = labels;
        self
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Check that the options can drive a terminating scan.
    ///
    /// # Errors
    ///
    /// - [`RegionError::InvalidParameters`] if the label range is inverted
    /// - [`RegionError::LabelRangeOverlap`] if any label satisfies the seed
    ///   predicate
    pub fn validate(&self) -> RegionResult<()> {
        let LabelRange { low, high } = self.labels;
        LabelRange::new(low, high)?;
        if self.labels.values().any(|v| self.seed.accepts(v)) {
            return Err(RegionError::LabelRangeOverlap { low, high });
        }
        Ok(())
    }
}

/// Label every region of qualifying pixels in `grid`.
///
/// Each pixel that still satisfies `options.seed` when the row-major scan
/// reaches it seeds a new region, grown with [`Region::grow`] under the
/// same predicate and a label from `labels`. Pixels that never qualify are
/// left untouched. A grid with no samples yields no regions.
///
/// # Returns
///
/// The regions in seeding order.
///
/// # Errors
///
/// Returns the errors of [`LabelOptions::validate`], or
/// [`RegionError::LabelAccepted`] if `labels` yields a value outside the
/// configured range that the predicate accepts.
pub fn label_regions<S>(
    grid: &mut Grid,
    options: &LabelOptions,
    labels: &mut S,
) -> RegionResult<Vec<Region>>
where
    S: LabelSource + ?Sized,
{
    options.validate()?;

    let mut regions = Vec::new();
    let accept = |v: u8| options.seed.accepts(v);

    for at in grid.coords() {
        if !accept(grid.get_unchecked(at)) {
            continue;
        }
        let label = labels.next_label(options.labels);
        let region = Region::grow(grid, at, label, accept, options.connectivity)?;
        log::trace!(
            "region {} seeded at {at}: label {label}, {} pixels",
            regions.len(),
            region.len()
        );
        regions.push(region);
    }

    log::debug!(
        "labeled {} regions covering {} pixels in {}x{} grid",
        regions.len(),
        regions.iter().map(Region::len).sum::<usize>(),
        grid.rows(),
        grid.cols()
    );
    Ok(regions)
}
