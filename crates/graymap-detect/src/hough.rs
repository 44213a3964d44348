//! Hough line detection
//!
//! # Algorithm Overview
//!
//! 1. **Edges**: binarize the source with the thresholded Prewitt operator.
//!
//! 2. **Voting**: every edge sample at row `i`, column `j` with intensity
//!    at least `edge_cutoff` votes, for each integer angle `theta` in
//!    `0..=180` degrees, into cell `(rho, theta)` with
//!    `rho = round(i * cos(theta) + j * sin(theta))`, when
//!    `0 <= rho < diag` and `diag = floor(sqrt(h^2 + w^2))`. Votes saturate
//!    at 255.
//!
//! 3. **Extraction**: cells with at least `vote_threshold` votes are lines,
//!    scanned rho-major.
//!
//! 4. **Drawing**: each line is rasterized column by column at
//!    `row = round((rho - j * sin(theta)) / cos(theta))` and the result is
//!    added (saturating) to the source.

use crate::{DetectError, DetectResult};
use graymap_core::{Raster, RasterMut, offset_of};
use graymap_filter::prewitt_edge_threshold;

/// Number of accumulator angles (0..=180 degrees).
pub const NUM_ANGLES: u32 = 181;

/// `|cos(theta)|` below this is treated as zero when drawing.
const COS_EPSILON: f64 = 1e-9;

/// Options for Hough line detection
#[derive(Debug, Clone)]
pub struct HoughOptions {
    /// Prewitt threshold for the edge stage (default: 100)
    pub edge_threshold: u32,

    /// Minimum edge intensity that casts votes (default: 240)
    pub edge_cutoff: u8,

    /// Minimum votes for a cell to count as a line (default: 108)
    pub vote_threshold: u8,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            edge_threshold: 100,
            edge_cutoff: 240,
            vote_threshold: 108,
        }
    }
}

impl HoughOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Prewitt edge threshold
    pub fn with_edge_threshold(mut self, threshold: u32) -> Self {
        self.edge_threshold = threshold;
        self
    }

    /// Set the minimum voting edge intensity
    pub fn with_edge_cutoff(mut self, cutoff: u8) -> Self {
        self.edge_cutoff = cutoff;
        self
    }

    /// Set the vote threshold
    pub fn with_vote_threshold(mut self, threshold: u8) -> Self {
        self.vote_threshold = threshold;
        self
    }

    /// Validate options
    pub fn validate(&self) -> DetectResult<()> {
        if self.edge_cutoff == 0 {
            return Err(DetectError::InvalidParameter(
                "edge_cutoff must be positive".to_string(),
            ));
        }
        if self.vote_threshold == 0 {
            return Err(DetectError::InvalidParameter(
                "vote_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A detected line in (rho, theta) space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoughLine {
    /// Distance from the origin, in pixels
    pub rho: u32,
    /// Angle in degrees (0 = horizontal line, 90 = vertical line)
    pub theta_deg: u32,
    /// Votes received (saturated at 255)
    pub votes: u8,
}

impl HoughLine {
    /// Angle in radians.
    pub fn theta(&self) -> f64 {
        (self.theta_deg as f64).to_radians()
    }

    /// Row where this line crosses column `col`.
    ///
    /// Returns `None` for vertical lines (`cos(theta) == 0`).
    pub fn row_at(&self, col: u32) -> Option<f64> {
        let (sin_t, cos_t) = self.theta().sin_cos();
        if cos_t.abs() < COS_EPSILON {
            return None;
        }
        Some((self.rho as f64 - col as f64 * sin_t) / cos_t)
    }
}

/// Result of the full Hough pipeline
#[derive(Debug, Clone)]
pub struct HoughResult {
    /// Source image with detected lines added on top
    pub overlay: Raster,
    /// Detected lines, rho-major
    pub lines: Vec<HoughLine>,
    /// Vote accumulator, `diag` rows by 181 columns
    pub votes: Raster,
}

/// Accumulate votes from an edge image.
///
/// Returns a raster of `floor(sqrt(h^2 + w^2))` rows (rho) by
/// [`NUM_ANGLES`] columns (theta) with ceiling 255.
pub fn hough_accumulate(edges: &Raster, options: &HoughOptions) -> DetectResult<Raster> {
    options.validate()?;

    let w = edges.width();
    let h = edges.height();
    let diag = ((h as f64).powi(2) + (w as f64).powi(2)).sqrt().floor() as u32;

    let trig: Vec<(f64, f64)> = (0..NUM_ANGLES)
        .map(|deg| (deg as f64).to_radians().sin_cos())
        .collect();

    let mut votes = RasterMut::new(NUM_ANGLES, diag, 255)?;
    let acc = votes.data_mut();

    for i in 0..h {
        for (j, &v) in edges.row_data(i).iter().enumerate() {
            if v < options.edge_cutoff {
                continue;
            }
            for (theta, &(sin_t, cos_t)) in trig.iter().enumerate() {
                let rho = (i as f64 * cos_t + j as f64 * sin_t).round();
                if rho >= 0.0 && rho < diag as f64 {
                    let idx = offset_of(rho as usize, theta, NUM_ANGLES);
                    acc[idx] = acc[idx].saturating_add(1);
                }
            }
        }
    }

    Ok(votes.into())
}

/// Extract lines from a vote accumulator.
///
/// Scans rho-major and reports every cell with at least
/// `vote_threshold` votes, including vertical ones that
/// [`draw_lines`] cannot rasterize.
///
/// # Errors
///
/// Returns [`DetectError::InvalidParameter`] if `votes` is not
/// [`NUM_ANGLES`] columns wide.
pub fn find_lines(votes: &Raster, options: &HoughOptions) -> DetectResult<Vec<HoughLine>> {
    options.validate()?;
    if votes.width() != NUM_ANGLES {
        return Err(DetectError::InvalidParameter(format!(
            "vote raster must be {NUM_ANGLES} columns wide, got {}",
            votes.width()
        )));
    }

    let mut lines = Vec::new();
    for rho in 0..votes.height() {
        for (theta, &count) in votes.row_data(rho).iter().enumerate() {
            if count >= options.vote_threshold {
                lines.push(HoughLine {
                    rho,
                    theta_deg: theta as u32,
                    votes: count,
                });
            }
        }
    }
    Ok(lines)
}

/// Rasterize lines onto a fresh `width x height` image.
///
/// Line pixels are set to `max_value`. Vertical lines are skipped.
pub fn draw_lines(
    lines: &[HoughLine],
    height: u32,
    width: u32,
    max_value: u8,
) -> DetectResult<Raster> {
    let mut out = RasterMut::new(width, height, max_value)?;
    for line in lines {
        for col in 0..width {
            let Some(row) = line.row_at(col) else {
                break;
            };
            let row = row.round();
            if row >= 0.0 && row < height as f64 {
                out.set_pixel_unchecked(col, row as u32, max_value);
            }
        }
    }
    Ok(out.into())
}

/// Run the full Hough pipeline.
///
/// # Example
///
/// ```
/// use graymap_core::Raster;
/// use graymap_detect::{HoughOptions, hough_transform};
///
/// let src = Raster::new(64, 64, 255).unwrap();
/// let result = hough_transform(&src, &HoughOptions::default()).unwrap();
/// assert!(result.lines.is_empty());
/// assert_eq!(result.overlay, src);
/// ```
pub fn hough_transform(src: &Raster, options: &HoughOptions) -> DetectResult<HoughResult> {
    options.validate()?;

    let edges = prewitt_edge_threshold(src, options.edge_threshold)?;
    let votes = hough_accumulate(&edges, options)?;
    let lines = find_lines(&votes, options)?;
    let line_raster = draw_lines(&lines, src.height(), src.width(), src.max_value())?;
    let overlay = src.arith_add(&line_raster)?;

    Ok(HoughResult {
        overlay,
        lines,
        votes,
    })
}

/// Detect lines with default options and the given edge threshold,
/// returning only the overlay.
pub fn hough_lines(src: &Raster, seuil: u32) -> DetectResult<Raster> {
    let options = HoughOptions::default().with_edge_threshold(seuil);
    Ok(hough_transform(src, &options)?.overlay)
}
