//! Error types for edgeseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] edgeseg_core::Error),

    /// Seed or query coordinate outside the grid
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: u32, col: u32 },

    /// Region growing was started without seeds
    #[error("empty seed list")]
    EmptySeeds,

    /// A geometric estimator received no points
    #[error("empty point set")]
    EmptyPointSet,

    /// The label would itself be accepted by the inclusion predicate
    #[error("label {label} satisfies the inclusion predicate")]
    LabelAccepted { label: u8 },

    /// Some value in the label range satisfies the seed predicate
    #[error("label range [{low}, {high}] overlaps the seed predicate")]
    LabelRangeOverlap { low: u8, high: u8 },

    /// Polygon input is not a closed chain of 8-adjacent pixels
    #[error("boundary chain broken between index {index} and its successor")]
    BrokenBoundary { index: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
