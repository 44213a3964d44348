//! Image arithmetic operations
//!
//! Pixel-wise saturating arithmetic:
//!
//! - Scalar helpers ([`add_clamped`], [`sub_clamped`])
//! - Image addition and subtraction ([`Raster::arith_add`], [`Raster::arith_subtract`])
//! - Brightness adjustment ([`Raster::add_constant`])
//!
//! Results are clamped to `[0, max_value]`, never wrapped.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

/// Saturating addition: `min(a + b, ceiling)`.
///
/// # Example
///
/// ```
/// use graymap_core::add_clamped;
///
/// assert_eq!(add_clamped(200, 100, 255), 255);
/// assert_eq!(add_clamped(20, 30, 255), 50);
/// ```
#[inline]
pub fn add_clamped(a: u8, b: u8, ceiling: u8) -> u8 {
    (a as u16 + b as u16).min(ceiling as u16) as u8
}

/// Saturating subtraction: `max(a - b, 0)`.
#[inline]
pub fn sub_clamped(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

impl Raster {
    /// Add a constant value to all pixels.
    ///
    /// Creates a new image where each pixel value is shifted by `val`
    /// (negative values darken). Results are clipped to `[0, max_value]`.
    ///
    /// # Example
    ///
    /// ```
    /// use graymap_core::Raster;
    ///
    /// let raster = Raster::new(10, 10, 255).unwrap();
    /// let brightened = raster.add_constant(50).unwrap();
    /// assert_eq!(brightened.get_pixel(0, 0), Some(50));
    /// ```
    pub fn add_constant(&self, val: i32) -> Result<Raster> {
        let mut result_mut = RasterMut::new(self.width(), self.height(), self.max_value())?;
        let max = self.max_value() as i32;
        for (dst, &src) in result_mut.data_mut().iter_mut().zip(self.data()) {
            *dst = (src as i32).saturating_add(val).clamp(0, max) as u8;
        }
        Ok(result_mut.into())
    }

    /// Add another image to this one: self + other
    ///
    /// Each output pixel is `add_clamped(self, other, self.max_value())`.
    /// The result takes this image's `max_value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    pub fn arith_add(&self, other: &Raster) -> Result<Raster> {
        self.arith_binary_op(other, ArithBinaryOp::Add)
    }

    /// Subtract another image from this one: self - other
    ///
    /// Differences below zero are clipped to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    pub fn arith_subtract(&self, other: &Raster) -> Result<Raster> {
        self.arith_binary_op(other, ArithBinaryOp::Subtract)
    }

    fn arith_binary_op(&self, other: &Raster, op: ArithBinaryOp) -> Result<Raster> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }

        let max = self.max_value();
        let mut result_mut = RasterMut::new(self.width(), self.height(), max)?;
        let pairs = self.data().iter().zip(other.data());
        for (dst, (&v1, &v2)) in result_mut.data_mut().iter_mut().zip(pairs) {
            *dst = match op {
                ArithBinaryOp::Add => add_clamped(v1, v2, max),
                // other may carry a higher ceiling than self
                ArithBinaryOp::Subtract => sub_clamped(v1, v2).min(max),
            };
        }

        Ok(result_mut.into())
    }
}

#[derive(Debug, Clone, Copy)]
enum ArithBinaryOp {
    Add,
    Subtract,
}
