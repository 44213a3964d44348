//! graymap-detect - Feature detection for graymap
//!
//! Straight-line detection with the Hough transform: thresholded Prewitt
//! edges vote into a (rho, theta) accumulator, strong cells become lines,
//! and the lines are drawn back over the source image.

mod error;
pub mod hough;

pub use error::{DetectError, DetectResult};
pub use hough::{
    HoughLine, HoughOptions, HoughResult, NUM_ANGLES, draw_lines, find_lines, hough_accumulate,
    hough_lines, hough_transform,
};
