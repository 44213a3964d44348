//! Histogram generation for rasters
//!
//! Counts the occurrence of each intensity below the ceiling.

use super::Raster;

impl Raster {
    /// Get the intensity histogram of the image.
    ///
    /// The histogram has `max_value` buckets: bucket `v` counts the samples
    /// equal to `v` for `v` in `0..max_value`. Samples equal to `max_value`
    /// fall outside the buckets and are not counted, so the counts sum to
    /// `width * height` minus the number of saturated samples.
    ///
    /// # Example
    ///
    /// ```
    /// use graymap_core::Raster;
    ///
    /// let raster = Raster::new(100, 100, 255).unwrap();
    /// let hist = raster.histogram();
    /// assert_eq!(hist.len(), 255);
    /// assert_eq!(hist[0], 10_000);
    /// ```
    pub fn histogram(&self) -> Vec<u32> {
        let mut hist = vec![0u32; self.max_value() as usize];
        for &v in self.data() {
            if let Some(bucket) = hist.get_mut(v as usize) {
                *bucket += 1;
            }
        }
        hist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_uniform() {
        let raster = Raster::from_data(4, 4, 255, vec![37; 16]).unwrap();
        let hist = raster.histogram();
        assert_eq!(hist.len(), 255);
        assert_eq!(hist[37], 16);
        assert_eq!(hist.iter().sum::<u32>(), 16);
    }

    #[test]
    fn test_histogram_skips_saturated() {
        let raster = Raster::from_data(3, 2, 10, vec![0, 1, 10, 10, 9, 1]).unwrap();
        let hist = raster.histogram();
        assert_eq!(hist.len(), 10);
        assert_eq!(hist[0], 1);
        assert_eq!(hist[1], 2);
        assert_eq!(hist[9], 1);
        assert_eq!(hist.iter().sum::<u32>(), 4);
    }
}
