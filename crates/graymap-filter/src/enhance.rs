//! Image enhancement operations
//!
//! Tone reproduction curve (TRC) mapping, histogram equalization and
//! linear contrast stretching.

use crate::FilterResult;
use graymap_core::{Raster, RasterMut};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input sample values to output sample values.
pub type TrcLut = [u8; 256];

/// Generate a histogram equalization TRC lookup table.
///
/// With `N = width * height` and `cdf[v] = sum(hist[0..=v]) / N`, sample
/// `v` maps to `floor(cdf[v] * 255)`. Samples equal to `max_value` lie
/// outside the histogram and use `cdf = 1.0`. The cumulative counts are
/// kept as integers so the floor is exact.
pub fn equalize_trc(src: &Raster) -> TrcLut {
    let hist = src.histogram();
    let n = src.pixel_count() as u64;

    let mut lut = [255u8; 256];
    let mut cumul = 0u64;
    for (entry, &count) in lut.iter_mut().zip(&hist) {
        cumul += count as u64;
        *entry = (cumul * 255 / n) as u8;
    }
    lut
}

/// Apply a TRC lookup table, returning a new raster.
///
/// Mapped values above the ceiling are clamped to `max_value`.
pub fn trc_map(src: &Raster, lut: &TrcLut) -> FilterResult<Raster> {
    let max = src.max_value();
    let mut out_mut = RasterMut::new(src.width(), src.height(), max)?;
    for (dst, &v) in out_mut.data_mut().iter_mut().zip(src.data()) {
        *dst = lut[v as usize].min(max);
    }
    Ok(out_mut.into())
}

/// Histogram-equalize an image.
///
/// See [`equalize_trc`] for the mapping.
pub fn equalize(src: &Raster) -> FilterResult<Raster> {
    trc_map(src, &equalize_trc(src))
}

/// Stretch intensities linearly so the darkest sample maps to 0 and the
/// brightest to `max_value`.
///
/// Each sample becomes `max_value * (v - min) / (max - min)` in integer
/// arithmetic. A flat image (`min == max`) is returned unchanged.
pub fn stretch_contrast(src: &Raster) -> FilterResult<Raster> {
    let (lo, hi) = src
        .data()
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo >= hi {
        return Ok(src.deep_clone());
    }

    let ceiling = src.max_value() as u32;
    let range = (hi - lo) as u32;
    let mut lut = [0u8; 256];
    for (v, entry) in lut.iter_mut().enumerate().skip(lo as usize) {
        *entry = (ceiling * (v as u32 - lo as u32) / range).min(ceiling) as u8;
    }
    trc_map(src, &lut)
}
