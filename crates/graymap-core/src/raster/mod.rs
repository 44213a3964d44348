//! Raster - The main image container
//!
//! A `Raster` is a rectangular grid of single-channel 8-bit samples plus
//! its declared intensity ceiling (`max_value`).
//!
//! # Pixel layout
//!
//! - One byte per sample, rows stored top to bottom without padding
//! - Sample at row `y`, column `x` lives at offset `y * width + x`
//! - Every sample is in `0..=max_value`; writers clamp, they never wrap
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.
//! Dropping the last handle releases the buffer.

mod access;
pub mod arith;
mod histogram;

pub use access::{col_of, offset_of, row_of};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Intensity ceiling
    max_value: u8,
    /// Row-major samples, `width * height` bytes
    data: Vec<u8>,
}

/// Raster - Main image container
///
/// `Raster` is the fundamental image type. It uses reference counting via
/// `Arc` for efficient cloning; every transform returns a new `Raster`
/// with its own buffer.
///
/// # Examples
///
/// ```
/// use graymap_core::Raster;
///
/// // Create a new black 640x480 image with ceiling 255
/// let raster = Raster::new(640, 480, 255).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.max_value(), 255);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions and ceiling.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `max_value` - Intensity ceiling (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// buffer size overflows, [`Error::InvalidMaxValue`] if `max_value` is 0,
    /// and [`Error::AllocationFailed`] if the buffer cannot be reserved.
    pub fn new(width: u32, height: u32, max_value: u8) -> Result<Self> {
        check_max_value(max_value)?;
        let len = buffer_len(width, height)?;
        let data = alloc_zeroed(len)?;

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                max_value,
                data,
            }),
        })
    }

    /// Create a raster from existing row-major samples.
    ///
    /// Samples above `max_value` are clamped to `max_value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data.len() != width * height`,
    /// plus the errors of [`Raster::new`] for invalid dimensions or ceiling.
    pub fn from_data(width: u32, height: u32, max_value: u8, mut data: Vec<u8>) -> Result<Self> {
        check_max_value(max_value)?;
        let len = buffer_len(width, height)?;
        if data.len() != len {
            return Err(Error::InvalidParameter(format!(
                "expected {len} samples for {width}x{height}, got {}",
                data.len()
            )));
        }
        for v in data.iter_mut() {
            *v = (*v).min(max_value);
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                max_value,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the intensity ceiling.
    #[inline]
    pub fn max_value(&self) -> u8 {
        self.inner.max_value
    }

    /// Number of samples (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Create a new zero-filled raster with the same dimensions and ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the buffer cannot be reserved.
    pub fn create_template(&self) -> Result<Self> {
        Raster::new(self.width(), self.height(), self.max_value())
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Count the non-zero samples.
    pub fn count_pixels(&self) -> usize {
        self.inner.data.iter().filter(|&&v| v != 0).count()
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                max_value: self.inner.max_value,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                max_value: self.inner.max_value,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.max_value == other.inner.max_value
            && self.inner.data == other.inner.data
    }
}

impl Eq for Raster {}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new zero-filled mutable raster.
    ///
    /// Shorthand for `Raster::new(..)` followed by `try_into_mut`.
    pub fn new(width: u32, height: u32, max_value: u8) -> Result<Self> {
        check_max_value(max_value)?;
        let len = buffer_len(width, height)?;
        let data = alloc_zeroed(len)?;
        Ok(RasterMut {
            inner: RasterData {
                width,
                height,
                max_value,
                data,
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the intensity ceiling.
    #[inline]
    pub fn max_value(&self) -> u8 {
        self.inner.max_value
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    ///
    /// Callers writing through this slice are responsible for keeping
    /// samples within `0..=max_value`.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

fn check_max_value(max_value: u8) -> Result<()> {
    if max_value == 0 {
        return Err(Error::InvalidMaxValue(0));
    }
    Ok(())
}

/// Number of samples for `width x height`, rejecting empty or overflowing shapes.
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Reserve a zeroed buffer, reporting allocation failure instead of aborting.
fn alloc_zeroed(len: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;
    data.resize(len, 0);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let raster = Raster::new(7, 3, 255).unwrap();
        assert_eq!(raster.pixel_count(), 21);
        assert!(raster.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(matches!(
            Raster::new(0, 10, 255),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(Raster::new(10, 0, 255).is_err());
    }

    #[test]
    fn test_new_invalid_max_value() {
        assert!(matches!(
            Raster::new(4, 4, 0),
            Err(Error::InvalidMaxValue(0))
        ));
    }

    #[test]
    fn test_from_data_clamps() {
        let raster = Raster::from_data(2, 2, 100, vec![0, 50, 100, 250]).unwrap();
        assert_eq!(raster.data(), &[0, 50, 100, 100]);
    }

    #[test]
    fn test_from_data_length_mismatch() {
        assert!(Raster::from_data(3, 3, 255, vec![0; 8]).is_err());
    }

    #[test]
    fn test_create_template() {
        let raster = Raster::from_data(3, 2, 200, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let template = raster.create_template().unwrap();
        assert!(template.sizes_equal(&raster));
        assert_eq!(template.max_value(), 200);
        assert_eq!(template.count_pixels(), 0);
    }

    #[test]
    fn test_try_into_mut_requires_unique() {
        let raster = Raster::new(2, 2, 255).unwrap();
        let shared = raster.clone();
        assert_eq!(raster.ref_count(), 2);
        let raster = raster.try_into_mut().unwrap_err();
        drop(shared);
        let mut rm = raster.try_into_mut().unwrap();
        rm.data_mut().fill(255);
        let raster: Raster = rm.into();
        assert_eq!(raster.data(), &[255; 4]);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let raster = Raster::new(2, 2, 255).unwrap();
        let copy = raster.deep_clone();
        assert_eq!(raster.ref_count(), 1);
        assert_eq!(copy, raster);
    }

    #[test]
    fn test_row_data() {
        let raster = Raster::from_data(3, 2, 255, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row_data(1), &[4, 5, 6]);
    }
}
