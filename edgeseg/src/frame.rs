//! Per-frame segmentation pipeline
//!
//! A [`FrameProcessor`] turns one edge raster into a labeled and annotated
//! raster plus a [`FrameReport`]. It keeps no region state between frames;
//! only the label source advances.

use edgeseg_core::Grid;
use edgeseg_region::{
    AnnotateOptions, DescribeOptions, LabelOptions, LabelSource, RandomLabels, RegionDescriptor,
    RegionResult, annotate_regions, describe_regions, label_regions,
};

/// Options for the whole pipeline
#[derive(Debug, Clone, Default)]
pub struct FrameOptions {
    /// Seeding, label range and growth connectivity
    pub label: LabelOptions,
    /// Size window, centroid estimator and boundary connectivity
    pub describe: DescribeOptions,
    /// What gets drawn back into the frame
    pub annotate: AnnotateOptions,
}

impl FrameOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the labeling options
    pub fn with_label(mut self, label: LabelOptions) -> Self {
        self.label = label;
        self
    }

    /// Set the description options
    pub fn with_describe(mut self, describe: DescribeOptions) -> Self {
        self.describe = describe;
        self
    }

    /// Set the annotation options
    pub fn with_annotate(mut self, annotate: AnnotateOptions) -> Self {
        self.annotate = annotate;
        self
    }

    /// Check labeling and description options.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`LabelOptions::validate`] and
    /// [`DescribeOptions::validate`].
    pub fn validate(&self) -> RegionResult<()> {
        self.label.validate()?;
        self.describe.validate()
    }
}

/// Result of processing one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Number of regions labeled, before size filtering
    pub region_count: usize,
    /// Number of pixels that received a region label
    pub labeled_pixels: usize,
    /// Regions inside the size window
    pub descriptors: Vec<RegionDescriptor>,
    /// Number of samples written by annotation
    pub annotated_pixels: usize,
}

/// Runs label, describe and annotate on successive frames.
#[derive(Debug)]
pub struct FrameProcessor<S> {
    options: FrameOptions,
    labels: S,
}

impl FrameProcessor<RandomLabels> {
    /// Processor drawing random labels seeded from the system clock.
    pub fn from_time(options: FrameOptions) -> Self {
        Self::new(options, RandomLabels::from_time())
    }
}

impl<S: LabelSource> FrameProcessor<S> {
    /// Create a processor with the given label source.
    pub fn new(options: FrameOptions, labels: S) -> Self {
        Self { options, labels }
    }

    /// Replace the pipeline options for subsequent frames.
    pub fn set_options(&mut self, options: FrameOptions) {
        self.options = options;
    }

    /// Segment and annotate `grid` in place.
    ///
    /// Options are validated before the grid is touched, so a failed call
    /// leaves the frame unchanged.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`FrameOptions::validate`], or any error raised
    /// while labeling or describing regions.
    pub fn process(&mut self, grid: &mut Grid) -> RegionResult<FrameReport> {
        self.options.validate()?;

        let regions = label_regions(grid, &self.options.label, &mut self.labels)?;
        let region_count = regions.len();
        let labeled_pixels = regions.iter().map(|r| r.len()).sum::<usize>();

        let descriptors = describe_regions(grid, regions, &self.options.describe)?;
        let annotated_pixels = annotate_regions(grid, &descriptors, &self.options.annotate);

        log::debug!(
            "frame {}x{}: {region_count} regions, {labeled_pixels} labeled pixels, {} annotated",
            grid.rows(),
            grid.cols(),
            descriptors.len()
        );
        Ok(FrameReport {
            region_count,
            labeled_pixels,
            descriptors,
            annotated_pixels,
        })
    }
}
