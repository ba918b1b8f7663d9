//! Transparent padding that keeps the canvas size.
//!
//! The artwork is shrunk with Lanczos3 so the padding fits inside the
//! original dimensions, then placed on a clear canvas.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{IconError, Result};
use crate::types::PixelGrid;

/// Fail with [`IconError::InvalidPadding`] unless `padding` leaves room for content.
pub fn check_padding(padding: u32, width: u32, height: u32) -> Result<()> {
    let doubled = u64::from(padding) * 2;
    if padding > 0 && (doubled >= u64::from(width) || doubled >= u64::from(height)) {
        return Err(IconError::InvalidPadding {
            padding,
            width,
            height,
        });
    }
    Ok(())
}

/// Shrink the content by `padding` on every side, keeping the canvas size.
pub fn add_padding(grid: PixelGrid, padding: u32) -> Result<PixelGrid> {
    if padding == 0 {
        return Ok(grid);
    }

    let (width, height) = (grid.width(), grid.height());
    check_padding(padding, width, height)?;

    let content_width = width - padding * 2;
    let content_height = height - padding * 2;

    let resized = imageops::resize(
        grid.as_image(),
        content_width,
        content_height,
        FilterType::Lanczos3,
    );

    let mut canvas = RgbaImage::new(width, height);
    imageops::replace(&mut canvas, &resized, i64::from(padding), i64::from(padding));

    Ok(PixelGrid::from(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_zero_is_identity() {
        let grid = PixelGrid::filled(4, 3, Colour::rgb(1, 2, 3));
        assert_eq!(add_padding(grid.clone(), 0).unwrap(), grid);
    }

    #[test]
    fn test_keeps_dimensions_and_clears_border() {
        let grid = PixelGrid::filled(16, 12, Colour::rgb(200, 40, 40));
        let out = add_padding(grid, 3).unwrap();

        assert_eq!(out.width(), 16);
        assert_eq!(out.height(), 12);

        for (x, y, colour) in out.enumerate() {
            let inside = (3..13).contains(&x) && (3..9).contains(&y);
            if inside {
                assert!(colour.a > 0, "content pixel ({}, {}) is transparent", x, y);
            } else {
                assert_eq!(colour, Colour::TRANSPARENT, "border pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_uniform_content_stays_close_to_source() {
        let grid = PixelGrid::filled(20, 20, Colour::rgb(200, 40, 40));
        let out = add_padding(grid, 5).unwrap();
        let centre = out.get(10, 10);

        assert!(centre.r.abs_diff(200) <= 1);
        assert!(centre.g.abs_diff(40) <= 1);
        assert!(centre.a >= 254);
    }

    #[test]
    fn test_rejects_oversized_padding() {
        let grid = PixelGrid::new(10, 20);

        // 2 * 5 == width
        let err = add_padding(grid.clone(), 5).unwrap_err();
        assert!(matches!(
            err,
            IconError::InvalidPadding {
                padding: 5,
                width: 10,
                height: 20
            }
        ));

        assert!(add_padding(grid.clone(), 4).is_ok());
        assert!(add_padding(grid, 60).is_err());
    }

    #[test]
    fn test_check_padding_bounds() {
        for (w, h) in [(1, 1), (2, 9), (9, 2), (10, 10), (33, 17)] {
            for p in 0..20u32 {
                let expected_err = p > 0 && (2 * p >= w || 2 * p >= h);
                assert_eq!(
                    check_padding(p, w, h).is_err(),
                    expected_err,
                    "padding {} on {}x{}",
                    p,
                    w,
                    h
                );
            }
        }
    }
}
