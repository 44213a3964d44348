//! graymap-filter - Image filtering operations
//!
//! This crate provides:
//!
//! - A single anchored convolution engine over integer kernels
//! - Smoothing (mean, Gaussian)
//! - Edge detection (Robert, Prewitt, Sobel, Laplacian), plain and thresholded
//! - Histogram equalization and contrast stretching
//! - Fixed and Otsu thresholding

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;
pub mod threshold;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{Combine, KernelSet, convolve, smooth_gaussian, smooth_mean};
pub use edge::{
    EdgeOperator, gradient_edge, gradient_edge_threshold, laplacian_edge,
    laplacian_edge_threshold, prewitt_edge, prewitt_edge_threshold, robert_edge,
    robert_edge_threshold, sobel_edge, sobel_edge_threshold,
};
pub use enhance::{TrcLut, equalize, equalize_trc, stretch_contrast, trc_map};
pub use threshold::{otsu, otsu_threshold_value, threshold};
