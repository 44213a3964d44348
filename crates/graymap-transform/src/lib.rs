//! graymap-transform - Geometric resampling for graymap
//!
//! Factor-of-two zoom in both directions:
//!
//! - [`zoom_in`]: halve each dimension, 2x2 box mean
//! - [`zoom_out`]: double each dimension, nearest-neighbour replication

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{ZoomDirection, zoom, zoom_in, zoom_out};
