//! Outline ring generation.
//!
//! The ring is the set of pixels newly covered when the alpha coverage is
//! dilated with a disk of the outline width. It is painted in the outline
//! colour underneath the untouched artwork.

use crate::types::{BinaryMask, Colour, OutlineSpec, PixelGrid};

use super::{dilate, StructuringElement};

/// Mask of pixels that belong to the outline ring only.
pub fn outline_mask(grid: &PixelGrid, width_px: u32) -> BinaryMask {
    let coverage = BinaryMask::from_alpha(grid);
    let radius = StructuringElement::saturating_radius(width_px, grid.width(), grid.height());
    let dilated = dilate(&coverage, &StructuringElement::build(radius));
    dilated.and_not(&coverage)
}

/// Draw an outline of `spec.color` around every visible pixel.
///
/// Layers, bottom to top: transparent background, outline ring, original.
pub fn add_outline(grid: PixelGrid, spec: &OutlineSpec) -> PixelGrid {
    if spec.width_px == 0 {
        return grid;
    }

    let ring = outline_mask(&grid, spec.width_px);
    log::debug!(
        "outline ring covers {} pixel(s) at {}",
        ring.count(),
        spec
    );

    let mut result = PixelGrid::new(grid.width(), grid.height());
    for (x, y, source) in grid.enumerate() {
        let layer = if ring.get(i64::from(x), i64::from(y)) {
            spec.color
        } else {
            Colour::TRANSPARENT
        };
        let below = layer.over(Colour::TRANSPARENT);
        result.set(x, y, source.over(below));
    }

    result
}
