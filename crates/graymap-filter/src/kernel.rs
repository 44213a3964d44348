//! Convolution kernels
//!
//! A kernel is a small square matrix of coefficients applied by
//! correlation. Coefficients are stored as integer numerators over a common
//! positive divisor, so fractions like 1/9 or 1/16 are represented exactly
//! and the engine never accumulates rounding error.

use crate::{FilterError, FilterResult};

/// A 2x2 or 3x3 convolution kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    /// Side length (2 or 3)
    size: u32,
    /// Numerators, row-major
    data: Vec<i32>,
    /// Common denominator, > 0
    divisor: i32,
}

impl Kernel {
    /// Create a kernel from row-major numerators and a divisor.
    ///
    /// The effective coefficient at (x, y) is `data[y * size + x] / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is not 2 or 3,
    /// `data.len() != size * size`, or `divisor <= 0`.
    pub fn new(size: u32, data: &[i32], divisor: i32) -> FilterResult<Self> {
        if !(2..=3).contains(&size) {
            return Err(FilterError::InvalidKernel(format!(
                "size must be 2 or 3, got {size}"
            )));
        }
        if data.len() != (size * size) as usize {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} coefficients, got {}",
                size * size,
                data.len()
            )));
        }
        if divisor <= 0 {
            return Err(FilterError::InvalidKernel(format!(
                "divisor must be positive, got {divisor}"
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
            divisor,
        })
    }

    fn preset(size: u32, data: &[i32], divisor: i32) -> Self {
        Kernel {
            size,
            data: data.to_vec(),
            divisor,
        }
    }

    /// 3x3 mean kernel, every coefficient 1/9.
    pub fn mean() -> Self {
        Self::preset(3, &[1; 9], 9)
    }

    /// 3x3 Gaussian kernel: 1/16 corners, 1/8 edges, 1/4 center.
    pub fn gaussian() -> Self {
        Self::preset(3, &[1, 2, 1, 2, 4, 2, 1, 2, 1], 16)
    }

    /// 3x3 eight-neighbour Laplacian, center -8.
    pub fn laplacian() -> Self {
        Self::preset(3, &[1, 1, 1, 1, -8, 1, 1, 1, 1], 1)
    }

    /// 3x3 four-neighbour Laplacian, center -4.
    pub fn laplacian_4() -> Self {
        Self::preset(3, &[0, 1, 0, 1, -4, 1, 0, 1, 0], 1)
    }

    /// Prewitt horizontal-gradient kernel.
    pub fn prewitt_x() -> Self {
        Self::preset(3, &[-1, 0, 1, -1, 0, 1, -1, 0, 1], 1)
    }

    /// Prewitt vertical-gradient kernel.
    pub fn prewitt_y() -> Self {
        Self::preset(3, &[-1, -1, -1, 0, 0, 0, 1, 1, 1], 1)
    }

    /// Sobel horizontal-gradient kernel.
    pub fn sobel_x() -> Self {
        Self::preset(3, &[-1, 0, 1, -2, 0, 2, -1, 0, 1], 1)
    }

    /// Sobel vertical-gradient kernel.
    pub fn sobel_y() -> Self {
        Self::preset(3, &[-1, -2, -1, 0, 0, 0, 1, 2, 1], 1)
    }

    /// Robert cross kernel along the anti-diagonal.
    pub fn robert_x() -> Self {
        Self::preset(2, &[0, 1, -1, 0], 1)
    }

    /// Robert cross kernel along the main diagonal.
    pub fn robert_y() -> Self {
        Self::preset(2, &[1, 0, 0, -1], 1)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Common denominator of all coefficients.
    #[inline]
    pub fn divisor(&self) -> i32 {
        self.divisor
    }

    /// Numerators, row-major.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Numerator at (x, y), or `None` outside the kernel.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[(y * self.size + x) as usize])
    }

    /// Sum of the effective coefficients.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum::<i32>() as f64 / self.divisor as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(Kernel::new(3, &[1; 9], 9).is_ok());
        assert!(Kernel::new(4, &[1; 16], 16).is_err());
        assert!(Kernel::new(3, &[1; 8], 9).is_err());
        assert!(Kernel::new(2, &[1; 4], 0).is_err());
    }

    #[test]
    fn test_smoothing_kernels_sum_to_one() {
        assert_eq!(Kernel::mean().sum(), 1.0);
        assert_eq!(Kernel::gaussian().sum(), 1.0);
    }

    #[test]
    fn test_derivative_kernels_sum_to_zero() {
        for k in [
            Kernel::laplacian(),
            Kernel::laplacian_4(),
            Kernel::prewitt_x(),
            Kernel::prewitt_y(),
            Kernel::sobel_x(),
            Kernel::sobel_y(),
            Kernel::robert_x(),
            Kernel::robert_y(),
        ] {
            assert_eq!(k.sum(), 0.0, "{:?}", k);
        }
    }

    #[test]
    fn test_get() {
        let k = Kernel::sobel_x();
        assert_eq!(k.get(0, 1), Some(-2));
        assert_eq!(k.get(2, 1), Some(2));
        assert_eq!(k.get(3, 0), None);
        assert_eq!(Kernel::robert_x().get(1, 0), Some(1));
    }
}
