//! Convolution operations
//!
//! One engine serves every kernel-based filter. The window for output pixel
//! (x, y) is anchored at its top-left corner and spans
//! `(x..x+k, y..y+k)` for a k x k kernel; it is not centered.
//!
//! Border policy: output pixels whose window would leave the image keep
//! the value 0. For a 3x3 kernel that is the last two rows and columns,
//! for a 2x2 kernel the last row and column.

use crate::{FilterError, FilterResult, Kernel};
use graymap_core::{Raster, RasterMut, add_clamped, offset_of};

/// Kernels fed to [`convolve`]
#[derive(Debug, Clone)]
pub enum KernelSet {
    /// One kernel (smoothing, Laplacian)
    Single(Kernel),
    /// Two directional kernels of equal size (gradient operators)
    Pair {
        /// Horizontal-gradient kernel
        gx: Kernel,
        /// Vertical-gradient kernel
        gy: Kernel,
    },
}

impl KernelSet {
    fn size(&self) -> u32 {
        match self {
            KernelSet::Single(k) => k.size(),
            KernelSet::Pair { gx, .. } => gx.size(),
        }
    }
}

/// How per-kernel responses become an output sample
///
/// Every response is `|trunc(sum of coefficient * sample)|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Single kernel; response clamped to `max_value`
    Single,
    /// Pair; `add_clamped(min(gx, max), min(gy, max), max)`
    SumClamped,
    /// Pair; `max_value` if `min(gx, max) + min(gy, max)` is strictly
    /// greater than the threshold, else 0
    SumThreshold(u32),
    /// Single kernel; `max_value` if the unclamped response is at least
    /// the threshold, else 0
    MagnitudeThreshold(u32),
}

/// Convolve a raster with a kernel set and combine the responses.
///
/// Returns a new raster with the same shape and ceiling as `src`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if the two kernels of a pair
/// differ in size, or if `combine` does not fit the kernel set (a pair
/// policy with a single kernel or vice versa).
pub fn convolve(src: &Raster, kernels: &KernelSet, combine: Combine) -> FilterResult<Raster> {
    match (kernels, combine) {
        (KernelSet::Single(_), Combine::Single | Combine::MagnitudeThreshold(_)) => {}
        (KernelSet::Pair { gx, gy }, Combine::SumClamped | Combine::SumThreshold(_)) => {
            if gx.size() != gy.size() {
                return Err(FilterError::InvalidKernel(format!(
                    "kernel pair sizes differ: {} vs {}",
                    gx.size(),
                    gy.size()
                )));
            }
        }
        (KernelSet::Single(_), _) => {
            return Err(FilterError::InvalidKernel(format!(
                "{combine:?} needs a kernel pair"
            )));
        }
        (KernelSet::Pair { .. }, _) => {
            return Err(FilterError::InvalidKernel(format!(
                "{combine:?} needs a single kernel"
            )));
        }
    }

    let w = src.width();
    let h = src.height();
    let max = src.max_value();
    let max32 = max as u32;
    let k = kernels.size();

    let mut out_mut = RasterMut::new(w, h, max)?;

    // rows/cols whose window fits entirely inside the image
    let out_h = (h + 1).saturating_sub(k);
    let out_w = (w + 1).saturating_sub(k);

    for y in 0..out_h {
        for x in 0..out_w {
            let val = match (kernels, combine) {
                (KernelSet::Single(kernel), Combine::MagnitudeThreshold(t)) => {
                    if response(src, kernel, x, y) >= t { max } else { 0 }
                }
                (KernelSet::Single(kernel), _) => response(src, kernel, x, y).min(max32) as u8,
                (KernelSet::Pair { gx, gy }, Combine::SumThreshold(t)) => {
                    let sx = response(src, gx, x, y).min(max32);
                    let sy = response(src, gy, x, y).min(max32);
                    if sx + sy > t { max } else { 0 }
                }
                (KernelSet::Pair { gx, gy }, _) => {
                    let sx = response(src, gx, x, y).min(max32) as u8;
                    let sy = response(src, gy, x, y).min(max32) as u8;
                    add_clamped(sx, sy, max)
                }
            };
            let idx = offset_of(y as usize, x as usize, w);
            out_mut.data_mut()[idx] = val;
        }
    }

    Ok(out_mut.into())
}

/// Absolute truncated response of `kernel` anchored at (x, y).
///
/// The caller guarantees the window fits inside the image. Sums are
/// accumulated in `i64` (nine `i32 * 255` products cannot overflow it) and
/// responses beyond `u32::MAX` saturate.
fn response(src: &Raster, kernel: &Kernel, x: u32, y: u32) -> u32 {
    let k = kernel.size() as usize;
    let w = src.width();
    let data = src.data();
    let coeffs = kernel.data();
    let mut sum = 0i64;
    for ky in 0..k {
        let row = offset_of(y as usize + ky, x as usize, w);
        for kx in 0..k {
            sum += coeffs[ky * k + kx] as i64 * data[row + kx] as i64;
        }
    }
    // integer division truncates toward zero
    let magnitude = (sum / kernel.divisor() as i64).unsigned_abs();
    u32::try_from(magnitude).unwrap_or(u32::MAX)
}

/// Smooth with the 3x3 mean kernel (1/9 each).
pub fn smooth_mean(src: &Raster) -> FilterResult<Raster> {
    convolve(src, &KernelSet::Single(Kernel::mean()), Combine::Single)
}

/// Smooth with the 3x3 Gaussian kernel (1/16, 1/8, 1/4).
pub fn smooth_gaussian(src: &Raster) -> FilterResult<Raster> {
    convolve(src, &KernelSet::Single(Kernel::gaussian()), Combine::Single)
}
