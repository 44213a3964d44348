//! graymap - Grayscale raster processing for Rust
//!
//! Single-channel 8-bit images with an explicit intensity ceiling, read and
//! written as binary PGM.
//!
//! # Overview
//!
//! - Point operations (saturating add/subtract, brightness)
//! - Convolution filters (smoothing, Robert/Prewitt/Sobel/Laplacian edges)
//! - Histogram operations (equalization, fixed and Otsu thresholds)
//! - Factor-of-two zoom in and out
//! - Hough transform line detection
//!
//! # Example
//!
//! ```
//! use graymap::Raster;
//!
//! let raster = Raster::new(640, 480, 255).unwrap();
//! assert_eq!(raster.width(), 640);
//! assert_eq!(raster.height(), 480);
//! assert_eq!(raster.max_value(), 255);
//! ```

// Core types are used everywhere
pub use graymap_core::*;

// Domain crates as modules to avoid name conflicts
pub use graymap_detect as detect;
pub use graymap_filter as filter;
pub use graymap_io as io;
pub use graymap_transform as transform;
