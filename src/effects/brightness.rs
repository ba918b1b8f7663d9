//! Linear brightness remap of colour channels.

use crate::types::{Brightness, PixelGrid};

/// Scale R, G and B by `1 + delta / 100`, rounding and clamping to `0..=255`.
///
/// Alpha is left untouched. A zero delta hands the grid back as-is.
pub fn adjust_brightness(mut grid: PixelGrid, brightness: Brightness) -> PixelGrid {
    if brightness.is_identity() {
        return grid;
    }

    let factor = brightness.factor();
    let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;

    for pixel in grid.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [scale(r), scale(g), scale(b), a];
    }

    grid
}
