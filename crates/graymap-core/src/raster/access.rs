//! Pixel access functions
//!
//! Conversions between linear sample offsets and (row, column) positions,
//! and bounds-checked get/set of single samples.
//!
//! Coordinates follow the usual image convention: `x` is the column,
//! `y` is the row, and offset `y * width + x` addresses the sample.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

/// Row of a linear offset in an image of the given width.
#[inline]
pub fn row_of(offset: usize, width: u32) -> usize {
    offset / width as usize
}

/// Column of a linear offset in an image of the given width.
#[inline]
pub fn col_of(offset: usize, width: u32) -> usize {
    offset % width as usize
}

/// Linear offset of (row, col) in an image of the given width.
#[inline]
pub fn offset_of(row: usize, col: usize, width: u32) -> usize {
    row * width as usize + col
}

impl Raster {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[offset_of(y as usize, x as usize, self.width())]
    }
}

impl RasterMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[offset_of(y as usize, x as usize, self.width())]
    }

    /// Set a pixel value at (x, y).
    ///
    /// Values above `max_value` are stored as `max_value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            let len = self.data().len();
            return Err(Error::IndexOutOfBounds {
                index: offset_of(y as usize, x as usize, self.width()),
                len,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// The value is still clamped to `max_value`.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let max = self.max_value();
        let idx = offset_of(y as usize, x as usize, self.width());
        self.data_mut()[idx] = val.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_round_trip() {
        let width = 7;
        for offset in [0usize, 6, 7, 20, 48] {
            let r = row_of(offset, width);
            let c = col_of(offset, width);
            assert_eq!(offset_of(r, c, width), offset);
        }
        assert_eq!(row_of(20, 7), 2);
        assert_eq!(col_of(20, 7), 6);
    }

    #[test]
    fn test_get_set_pixel() {
        let mut rm = RasterMut::new(10, 5, 255).unwrap();
        rm.set_pixel(9, 4, 77).unwrap();
        assert_eq!(rm.get_pixel(9, 4), Some(77));
        assert_eq!(rm.data()[offset_of(4, 9, 10)], 77);

        let raster: Raster = rm.into();
        assert_eq!(raster.get_pixel(9, 4), Some(77));
        assert_eq!(raster.get_pixel(10, 4), None);
        assert_eq!(raster.get_pixel(0, 5), None);
    }

    #[test]
    fn test_set_pixel_clamps() {
        let mut rm = RasterMut::new(3, 3, 100).unwrap();
        rm.set_pixel(1, 1, 200).unwrap();
        assert_eq!(rm.get_pixel(1, 1), Some(100));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut rm = RasterMut::new(3, 3, 255).unwrap();
        assert!(matches!(
            rm.set_pixel(3, 0, 1),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }
}
