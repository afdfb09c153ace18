//! Error types for edgeseg-core
//!
//! Provides a unified error type for grid construction and pixel access.
//! Higher level crates wrap it in their own error enums.

use thiserror::Error;

/// edgeseg-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid grid dimensions (the element count overflows `usize`)
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: u32, cols: u32 },

    /// Nested sample rows exceed the `u32` grid dimensions
    #[error("grid dimensions overflow u32: {rows} rows of {cols} samples")]
    DimensionOverflow { rows: usize, cols: usize },

    /// Sample buffer does not match `rows * cols`
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Coordinate outside the grid
    #[error("index out of bounds: ({row}, {col}) not in {rows}x{cols}")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    /// Rows of a nested sample array have different lengths
    #[error("ragged rows: row {row} has {actual} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for edgeseg-core operations
pub type Result<T> = std::result::Result<T, Error>;
