//! I/O error types
//!
//! Provides a unified error type for image I/O. Malformed headers,
//! unsupported magic numbers and truncated sample data are reported here
//! so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a binary PGM (magic other than `P5`)
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header or sample data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] graymap_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
