//! Fixed-order effect pipeline.
//!
//! Effects are applied in this order, each feeding the next:
//!
//! 1. **Padding** - sets the final canvas geometry for later stages
//! 2. **Opacity flattening** - threshold-gated alpha to grey conversion
//! 3. **Brightness** - linear RGB remap
//! 4. **Outline** - drawn beneath the artwork, always last
//!
//! Reordering these changes the output, so the order is not configurable.
//! Stages that were not requested are skipped outright.

use std::path::Path;

use crate::codec::{encode_png, read_png, write_bytes};
use crate::error::Result;
use crate::types::{EffectRequest, PixelGrid};

use super::{add_outline, add_padding, adjust_brightness, check_padding, normalize_alpha};

/// Check everything about `request` that can fail against a grid of this size.
pub fn validate(request: &EffectRequest, width: u32, height: u32) -> Result<()> {
    if let Some(padding) = request.active_padding() {
        check_padding(padding, width, height)?;
    }
    Ok(())
}

/// Apply every requested effect to `grid`.
///
/// The request is validated before any stage runs.
pub fn apply(grid: PixelGrid, request: &EffectRequest) -> Result<PixelGrid> {
    validate(request, grid.width(), grid.height())?;

    let mut grid = grid;

    if let Some(padding) = request.active_padding() {
        log::debug!("padding by {}px", padding);
        grid = add_padding(grid, padding)?;
    }

    if request.remove_transparency {
        log::debug!(
            "flattening opacity at threshold {}",
            request.opacity_threshold.value()
        );
        grid = normalize_alpha(grid, request.opacity_threshold);
    }

    if let Some(brightness) = request.active_brightness() {
        log::debug!("adjusting brightness by {}", brightness.value());
        grid = adjust_brightness(grid, brightness);
    }

    if let Some(outline) = &request.outline {
        log::debug!("adding outline {}", outline);
        grid = add_outline(grid, outline);
    }

    Ok(grid)
}

/// Load `input`, apply `request` and write the result to `output` as PNG.
///
/// The output file is only created once every stage and the PNG encode
/// have succeeded.
pub fn process_file(input: &Path, output: &Path, request: &EffectRequest) -> Result<PixelGrid> {
    let grid = read_png(input)?;
    log::info!(
        "processing {} ({}x{})",
        input.display(),
        grid.width(),
        grid.height()
    );

    let result = apply(grid, request)?;
    let bytes = encode_png(&result, output)?;
    write_bytes(output, &bytes)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::types::{Brightness, Colour, OpacityThreshold, OutlineSpec};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn icon() -> PixelGrid {
        let mut grid = PixelGrid::new(12, 12);
        for y in 4..8 {
            for x in 4..8 {
                grid.set(x, y, Colour::new(100, 150, 200, 200));
            }
        }
        grid.set(3, 5, Colour::new(100, 150, 200, 64));
        grid
    }

    #[test]
    fn test_empty_request_is_identity() {
        let grid = icon();
        assert_eq!(apply(grid.clone(), &EffectRequest::new()).unwrap(), grid);
    }

    #[test]
    fn test_skipped_zero_stages() {
        let grid = icon();
        let request = EffectRequest::new()
            .with_padding(0)
            .with_brightness(Brightness::new(0));
        assert_eq!(apply(grid.clone(), &request).unwrap(), grid);
    }

    #[test]
    fn test_matches_manual_stage_order() {
        let request = EffectRequest::new()
            .with_padding(1)
            .with_remove_transparency(OpacityThreshold::new(128))
            .with_brightness(Brightness::new(-20))
            .with_outline(OutlineSpec::new(1, Colour::WHITE));

        let expected = {
            let g = add_padding(icon(), 1).unwrap();
            let g = normalize_alpha(g, OpacityThreshold::new(128));
            let g = adjust_brightness(g, Brightness::new(-20));
            add_outline(g, &OutlineSpec::new(1, Colour::WHITE))
        };

        assert_eq!(apply(icon(), &request).unwrap(), expected);
    }

    #[test]
    fn test_outline_runs_after_brightness() {
        // A dark outline would be brightened if the order were wrong
        let request = EffectRequest::new()
            .with_brightness(Brightness::new(100))
            .with_outline(OutlineSpec::new(1, Colour::rgb(10, 10, 10)));

        let out = apply(icon(), &request).unwrap();
        assert_eq!(out.get(4, 3), Colour::rgb(10, 10, 10));
    }

    #[test]
    fn test_normalize_then_brightness() {
        let request = EffectRequest::new()
            .with_remove_transparency(OpacityThreshold::new(128))
            .with_brightness(Brightness::new(-50));

        let out = apply(icon(), &request).unwrap();
        assert_eq!(out.get(4, 4), Colour::new(100, 100, 100, 255));
        // Below threshold: only brightness applies
        assert_eq!(out.get(3, 5), Colour::new(50, 75, 100, 64));
    }

    #[test]
    fn test_invalid_padding_fails_before_any_stage() {
        let request = EffectRequest::new()
            .with_padding(6)
            .with_outline(OutlineSpec::new(1, Colour::BLACK));

        let err = apply(icon(), &request).unwrap_err();
        assert!(matches!(err, IconError::InvalidPadding { padding: 6, .. }));
    }

    #[test]
    fn test_process_file_writes_png() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        icon().into_image().save(&input).unwrap();

        let request = EffectRequest::new().with_brightness(Brightness::new(-100));
        let result = process_file(&input, &output, &request).unwrap();

        let written = image::open(&output).unwrap().to_rgba8();
        assert_eq!(PixelGrid::from(written), result);
        assert_eq!(result.get(4, 4), Colour::new(0, 0, 0, 200));
        assert_eq!(result.get(0, 0), Colour::TRANSPARENT);
    }

    #[test]
    fn test_process_file_writes_nothing_on_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        icon().into_image().save(&input).unwrap();

        let request = EffectRequest::new().with_padding(100);
        assert!(process_file(&input, &output, &request).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_process_file_missing_input() {
        let dir = tempdir().unwrap();
        let err = process_file(
            &dir.path().join("missing.png"),
            &dir.path().join("out.png"),
            &EffectRequest::new(),
        )
        .unwrap_err();

        assert!(matches!(err, IconError::Io { .. }));
    }
}
