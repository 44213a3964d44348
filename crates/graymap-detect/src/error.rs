//! Error types for graymap-detect

use thiserror::Error;

/// Errors that can occur during detection
#[derive(Debug, Error)]
pub enum DetectError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] graymap_core::Error),

    /// Filter library error
    #[error("filter error: {0}")]
    Filter(#[from] graymap_filter::FilterError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for detection operations
pub type DetectResult<T> = Result<T, DetectError>;
