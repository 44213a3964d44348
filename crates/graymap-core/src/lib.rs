//! graymap Core - Raster container and point operations
//!
//! This crate provides the fundamental data structures used throughout
//! the graymap image engine:
//!
//! - [`Raster`] / [`RasterMut`] - single-channel 8-bit image (immutable / mutable)
//! - Addressing helpers ([`row_of`], [`col_of`], [`offset_of`])
//! - Saturating arithmetic ([`add_clamped`], [`sub_clamped`]) and the
//!   image-level add, subtract and brightness operations built on it
//! - Intensity histograms ([`Raster::histogram`])
//!
//! Every operation that produces an image allocates a fresh buffer; the
//! input is never modified. Nothing in this crate logs or prints: failures
//! are returned as [`Error`].

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::arith::{add_clamped, sub_clamped};
pub use raster::{Raster, RasterMut, col_of, offset_of, row_of};
