//! graymap-test - Regression test framework for graymap
//!
//! Regression tests run in one of three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with the golden files committed under
//!   `tests/golden` (a missing golden file is a failure)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use graymap_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("convolve");
//! rp.compare_values(80.0, raster.get_pixel(0, 0).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "ramp64.pgm")
pub fn load_test_image(name: &str) -> TestResult<graymap_core::Raster> {
    let path = test_data_path(name);
    graymap_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // graymap-test is at crates/graymap-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
