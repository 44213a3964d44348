//! Binary thresholding
//!
//! - Fixed threshold binarization ([`threshold`])
//! - Otsu's method for automatic threshold selection ([`otsu`])
//!
//! Output images keep the source ceiling and contain only 0 and
//! `max_value`.

use crate::{FilterError, FilterResult};
use graymap_core::{Raster, RasterMut};

/// Binarize at a fixed threshold.
///
/// Samples strictly below `seuil` become 0, all others `max_value`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidThreshold`] unless
/// `0 <= seuil <= max_value`.
pub fn threshold(src: &Raster, seuil: i32) -> FilterResult<Raster> {
    let max = src.max_value();
    if !(0..=max as i32).contains(&seuil) {
        return Err(FilterError::InvalidThreshold {
            threshold: seuil,
            max_value: max,
        });
    }

    let mut out_mut = RasterMut::new(src.width(), src.height(), max)?;
    for (dst, &v) in out_mut.data_mut().iter_mut().zip(src.data()) {
        *dst = if (v as i32) < seuil { 0 } else { max };
    }
    Ok(out_mut.into())
}

/// Compute the Otsu threshold of an image.
///
/// The histogram is extended with zero counts to 256 buckets. For each
/// candidate `i` in `1..=max_value`, with `N = width * height`:
///
/// ```text
/// p1 = sum(h[0..i]) / N        m1 = sum(h[0..i]) / i
/// p2 = sum(h[i..256]) / N      m2 = sum(h[i..256]) / (256 - i)
/// var1 = sum((h[j] - m1)^2, j < i) / i
/// var2 = sum((h[j] - m2)^2, j >= i) / (256 - i)
/// score(i) = p1 * var1 + p2 * var2
/// ```
///
/// The candidate with the largest score wins; ties go to the lowest `i`.
pub fn otsu_threshold_value(src: &Raster) -> u8 {
    let mut h = [0f64; 256];
    for (bucket, &count) in h.iter_mut().zip(&src.histogram()) {
        *bucket = count as f64;
    }
    let n = src.pixel_count() as f64;

    let mut best = 1u8;
    let mut best_score = f64::NEG_INFINITY;
    for i in 1..=src.max_value() as usize {
        let (low, high) = h.split_at(i);
        let low_count: f64 = low.iter().sum();
        let high_count: f64 = high.iter().sum();

        let p1 = low_count / n;
        let m1 = low_count / i as f64;
        let p2 = high_count / n;
        let m2 = high_count / (256 - i) as f64;

        let var1 = low.iter().map(|&c| (c - m1) * (c - m1)).sum::<f64>() / i as f64;
        let var2 = high.iter().map(|&c| (c - m2) * (c - m2)).sum::<f64>() / (256 - i) as f64;

        let score = p1 * var1 + p2 * var2;
        if score > best_score {
            best_score = score;
            best = i as u8;
        }
    }
    best
}

/// Binarize at the Otsu threshold.
pub fn otsu(src: &Raster) -> FilterResult<Raster> {
    threshold(src, otsu_threshold_value(src) as i32)
}
