//! Error types for graymap-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] graymap_core::Error),

    /// The resampled image would have an unusable size
    #[error("invalid output dimensions {width}x{height} for {op}")]
    InvalidDimension {
        /// Operation name
        op: &'static str,
        /// Requested output width
        width: u64,
        /// Requested output height
        height: u64,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
