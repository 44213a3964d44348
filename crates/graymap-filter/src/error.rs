//! Error types for graymap-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] graymap_core::Error),

    /// Invalid kernel, or a kernel set that does not fit the combine policy
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Threshold outside `0..=max_value`
    #[error("invalid threshold {threshold}: must be in 0..={max_value}")]
    InvalidThreshold {
        /// Requested threshold
        threshold: i32,
        /// Ceiling of the image being thresholded
        max_value: u8,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
