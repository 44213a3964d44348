//! Edge detection operations
//!
//! Gradient operators (Robert, Prewitt, Sobel) combine a horizontal and a
//! vertical kernel; the Laplacian uses a single eight-neighbour kernel.
//! Each comes in a plain form (clamped magnitude) and a thresholded form
//! producing a two-level image of 0 and `max_value`.

use crate::convolve::{Combine, KernelSet, convolve};
use crate::{FilterResult, Kernel};
use graymap_core::Raster;

/// Gradient operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOperator {
    /// 2x2 Robert cross
    Robert,
    /// 3x3 Prewitt
    Prewitt,
    /// 3x3 Sobel
    Sobel,
}

impl EdgeOperator {
    /// The (gx, gy) kernel pair for this operator.
    pub fn kernels(self) -> KernelSet {
        let (gx, gy) = match self {
            EdgeOperator::Robert => (Kernel::robert_x(), Kernel::robert_y()),
            EdgeOperator::Prewitt => (Kernel::prewitt_x(), Kernel::prewitt_y()),
            EdgeOperator::Sobel => (Kernel::sobel_x(), Kernel::sobel_y()),
        };
        KernelSet::Pair { gx, gy }
    }
}

/// Gradient magnitude: `min(|gx| + |gy|, max_value)`.
pub fn gradient_edge(src: &Raster, op: EdgeOperator) -> FilterResult<Raster> {
    convolve(src, &op.kernels(), Combine::SumClamped)
}

/// Thresholded gradient: `max_value` where `|gx| + |gy| > seuil`, else 0.
///
/// Each directional response is clamped to `max_value` before summing, so
/// a `seuil` of `2 * max_value` or more never fires.
pub fn gradient_edge_threshold(src: &Raster, op: EdgeOperator, seuil: u32) -> FilterResult<Raster> {
    convolve(src, &op.kernels(), Combine::SumThreshold(seuil))
}

/// Robert cross edge magnitude.
pub fn robert_edge(src: &Raster) -> FilterResult<Raster> {
    gradient_edge(src, EdgeOperator::Robert)
}

/// Prewitt edge magnitude.
pub fn prewitt_edge(src: &Raster) -> FilterResult<Raster> {
    gradient_edge(src, EdgeOperator::Prewitt)
}

/// Sobel edge magnitude.
pub fn sobel_edge(src: &Raster) -> FilterResult<Raster> {
    gradient_edge(src, EdgeOperator::Sobel)
}

/// Thresholded Robert cross edges.
pub fn robert_edge_threshold(src: &Raster, seuil: u32) -> FilterResult<Raster> {
    gradient_edge_threshold(src, EdgeOperator::Robert, seuil)
}

/// Thresholded Prewitt edges.
pub fn prewitt_edge_threshold(src: &Raster, seuil: u32) -> FilterResult<Raster> {
    gradient_edge_threshold(src, EdgeOperator::Prewitt, seuil)
}

/// Thresholded Sobel edges.
pub fn sobel_edge_threshold(src: &Raster, seuil: u32) -> FilterResult<Raster> {
    gradient_edge_threshold(src, EdgeOperator::Sobel, seuil)
}

/// Apply Laplacian edge detection.
///
/// Uses the eight-neighbour kernel (center -8); the absolute response is
/// clamped to `max_value`.
pub fn laplacian_edge(src: &Raster) -> FilterResult<Raster> {
    convolve(src, &KernelSet::Single(Kernel::laplacian()), Combine::Single)
}

/// Thresholded Laplacian: `max_value` where the absolute response is at
/// least `seuil`, else 0. The response is compared before clamping.
pub fn laplacian_edge_threshold(src: &Raster, seuil: u32) -> FilterResult<Raster> {
    convolve(
        src,
        &KernelSet::Single(Kernel::laplacian()),
        Combine::MagnitudeThreshold(seuil),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robert_checkerboard() {
        let src = Raster::from_data(2, 2, 255, vec![0, 255, 255, 0]).unwrap();
        let out = robert_edge(&src).unwrap();
        // gx = 255 - 255 = 0, gy = 0 - 0 = 0
        assert_eq!(out.get_pixel(0, 0), Some(0));
        assert_eq!(out.count_pixels(), 0);
    }

    #[test]
    fn test_robert_diagonal_step() {
        let src = Raster::from_data(2, 2, 255, vec![200, 0, 0, 0]).unwrap();
        let out = robert_edge(&src).unwrap();
        // gx = 0, gy = 200
        assert_eq!(out.get_pixel(0, 0), Some(200));
        assert_eq!(out.get_pixel(1, 0), Some(0));
    }

    #[test]
    fn test_sobel_vertical_step() {
        // left column 0, right columns 100
        let src = Raster::from_data(3, 3, 255, vec![0, 100, 100, 0, 100, 100, 0, 100, 100])
            .unwrap();
        let out = sobel_edge(&src).unwrap();
        // gx = 4 * 100 clamps to 255, gy = 0
        assert_eq!(out.get_pixel(0, 0), Some(255));

        let prewitt = prewitt_edge(&src).unwrap();
        // gx = 3 * 100 clamps to 255
        assert_eq!(prewitt.get_pixel(0, 0), Some(255));
    }

    #[test]
    fn test_threshold_is_strict() {
        let src = Raster::from_data(3, 3, 255, vec![0, 10, 10, 0, 10, 10, 0, 10, 10]).unwrap();
        // prewitt gx = 30, gy = 0
        assert_eq!(prewitt_edge(&src).unwrap().get_pixel(0, 0), Some(30));
        assert_eq!(
            prewitt_edge_threshold(&src, 29).unwrap().get_pixel(0, 0),
            Some(255)
        );
        assert_eq!(
            prewitt_edge_threshold(&src, 30).unwrap().get_pixel(0, 0),
            Some(0)
        );
    }

    #[test]
    fn test_threshold_ceiling_from_clamped_responses() {
        // bright 2x2 block bottom-right: gx = gy = 400, each clamped to 255
        let src = Raster::from_data(3, 3, 255, vec![0, 0, 0, 0, 200, 200, 0, 200, 200]).unwrap();
        let at = |seuil| prewitt_edge_threshold(&src, seuil).unwrap().get_pixel(0, 0);
        assert_eq!(at(509), Some(255));
        assert_eq!(at(510), Some(0));
    }

    #[test]
    fn test_threshold_output_is_two_level() {
        let data: Vec<u8> = (0..64u32).map(|i| ((i * 37) % 256) as u8).collect();
        let src = Raster::from_data(8, 8, 255, data).unwrap();
        for out in [
            robert_edge_threshold(&src, 40).unwrap(),
            sobel_edge_threshold(&src, 40).unwrap(),
            laplacian_edge_threshold(&src, 40).unwrap(),
        ] {
            assert!(out.data().iter().all(|&v| v == 0 || v == 255));
        }
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let src = Raster::from_data(5, 5, 255, vec![123; 25]).unwrap();
        for op in [EdgeOperator::Robert, EdgeOperator::Prewitt, EdgeOperator::Sobel] {
            assert_eq!(gradient_edge(&src, op).unwrap().count_pixels(), 0);
        }
        assert_eq!(laplacian_edge(&src).unwrap().count_pixels(), 0);
    }
}
