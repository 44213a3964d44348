//! Error types for graymap-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// graymap core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (zero, or too large to address)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Intensity ceiling outside 1..=255
    #[error("invalid max value: {0} (must be in 1..=255)")]
    InvalidMaxValue(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch between two operands
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Memory allocation failed
    #[error("memory allocation failed ({0} bytes)")]
    AllocationFailed(usize),
}

/// Result type alias for graymap operations
pub type Result<T> = std::result::Result<T, Error>;
