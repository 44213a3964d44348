//! Image scaling operations
//!
//! Factor-of-two resampling:
//! - Box reduction (2x2 mean) for zooming in
//! - Pixel replication for zooming out

use crate::{TransformError, TransformResult};
use graymap_core::{Raster, RasterMut, offset_of};

/// Zoom direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Halve the size
    In,
    /// Double the size
    Out,
}

/// Zoom an image by a factor of two in the given direction.
pub fn zoom(src: &Raster, direction: ZoomDirection) -> TransformResult<Raster> {
    match direction {
        ZoomDirection::In => zoom_in(src),
        ZoomDirection::Out => zoom_out(src),
    }
}

/// Halve both dimensions.
///
/// Output is `(width / 2) x (height / 2)`. Each output pixel is the mean of
/// its 2x2 source block, truncated. An odd trailing row or column of the
/// source is dropped.
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimension`] if either halved dimension
/// is 0.
pub fn zoom_in(src: &Raster) -> TransformResult<Raster> {
    let sw = src.width();
    let ow = sw / 2;
    let oh = src.height() / 2;
    if ow == 0 || oh == 0 {
        return Err(TransformError::InvalidDimension {
            op: "zoom_in",
            width: ow as u64,
            height: oh as u64,
        });
    }

    let mut out_mut = RasterMut::new(ow, oh, src.max_value())?;
    let data = src.data();
    for y in 0..oh as usize {
        let top = offset_of(2 * y, 0, sw);
        let bottom = offset_of(2 * y + 1, 0, sw);
        let row = out_mut.row_data_mut(y as u32);
        for (x, dst) in row.iter_mut().enumerate() {
            let sum = data[top + 2 * x] as u32
                + data[top + 2 * x + 1] as u32
                + data[bottom + 2 * x] as u32
                + data[bottom + 2 * x + 1] as u32;
            *dst = (sum / 4) as u8;
        }
    }

    Ok(out_mut.into())
}

/// Double both dimensions.
///
/// Output is `(2 * width) x (2 * height)`; every source pixel is replicated
/// into a 2x2 block.
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimension`] if the doubled size does
/// not fit in `u32`.
pub fn zoom_out(src: &Raster) -> TransformResult<Raster> {
    let (ow, oh) = match (src.width().checked_mul(2), src.height().checked_mul(2)) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(TransformError::InvalidDimension {
                op: "zoom_out",
                width: src.width() as u64 * 2,
                height: src.height() as u64 * 2,
            });
        }
    };

    let mut out_mut = RasterMut::new(ow, oh, src.max_value())?;
    for y in 0..oh {
        let src_row = src.row_data(y / 2);
        let row = out_mut.row_data_mut(y);
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = src_row[x / 2];
        }
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_box_mean() {
        let src = Raster::from_data(4, 2, 255, vec![0, 10, 100, 100, 3, 0, 100, 101]).unwrap();
        let out = zoom_in(&src).unwrap();
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 1);
        // 13 / 4 = 3, 401 / 4 = 100
        assert_eq!(out.data(), &[3, 100]);
    }

    #[test]
    fn test_zoom_in_odd_size_drops_trailing() {
        let src = Raster::from_data(3, 3, 255, vec![4, 4, 200, 4, 4, 200, 200, 200, 200]).unwrap();
        let out = zoom_in(&src).unwrap();
        assert_eq!(out.data(), &[4]);
    }

    #[test]
    fn test_zoom_in_too_small() {
        let src = Raster::new(1, 10, 255).unwrap();
        assert!(matches!(
            zoom_in(&src),
            Err(TransformError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_zoom_out_replicates() {
        let src = Raster::from_data(2, 1, 255, vec![7, 9]).unwrap();
        let out = zoom_out(&src).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 2);
        assert_eq!(out.data(), &[7, 7, 9, 9, 7, 7, 9, 9]);
    }

    #[test]
    fn test_zoom_preserves_max_value() {
        let src = Raster::from_data(2, 2, 99, vec![1, 2, 3, 99]).unwrap();
        assert_eq!(zoom(&src, ZoomDirection::Out).unwrap().max_value(), 99);
        assert_eq!(zoom(&src, ZoomDirection::In).unwrap().max_value(), 99);
    }
}
