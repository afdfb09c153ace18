//! Error types for the test harness

use thiserror::Error;

/// Errors that can occur while building fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Unknown character in an ASCII-art grid
    #[error("unknown fixture character {ch:?} at row {row}, column {col}")]
    FixtureChar { ch: char, row: usize, col: usize },

    /// Grid construction failed
    #[error("grid error: {0}")]
    Grid(#[from] edgeseg_core::Error),
}

/// Result type for test harness operations
pub type TestResult<T> = Result<T, TestError>;
