//! Opacity flattening.
//!
//! Pixels whose alpha reaches the threshold are replaced by an opaque grey
//! whose level is the old alpha, so soft edges become visible shading.
//! Pixels below the threshold keep their anti-aliasing untouched.

use crate::types::{OpacityThreshold, PixelGrid};

/// Replace each pixel with alpha `a >= threshold` (and `a > 0`) by `(a, a, a, 255)`.
pub fn normalize_alpha(mut grid: PixelGrid, threshold: OpacityThreshold) -> PixelGrid {
    let threshold = threshold.value();

    for pixel in grid.pixels_mut() {
        let a = pixel.0[3];
        if a > 0 && a >= threshold {
            pixel.0 = [a, a, a, 255];
        }
    }

    grid
}
