//! Apply command implementation.
//!
//! Runs the effect pipeline on one input image and writes one PNG.

use std::path::PathBuf;

use clap::Args;

use crate::effects::process_file;
use crate::error::Result;
use crate::output::{display_path, Printer};

use super::EffectArgs;

/// Apply effects to a single icon
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Input image path
    pub input: PathBuf,

    /// Output PNG path
    pub output: PathBuf,

    #[command(flatten)]
    pub effects: EffectArgs,
}

pub fn run(args: ApplyArgs, printer: &Printer) -> Result<()> {
    let request = args.effects.to_request()?;

    if request.is_empty() {
        printer.info("Skipped", "no effects requested (see --help for options)");
        return Ok(());
    }

    let grid = process_file(&args.input, &args.output, &request)?;

    let applied = request.summary();
    if !applied.is_empty() {
        printer.status("Applied", &applied.join(", "));
    }
    printer.success(
        "Saved",
        &format!(
            "{} ({}x{})",
            display_path(&args.output),
            grid.width(),
            grid.height()
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, PixelGrid};
    use tempfile::tempdir;

    fn args(input: PathBuf, output: PathBuf, effects: EffectArgs) -> ApplyArgs {
        ApplyArgs {
            input,
            output,
            effects,
        }
    }

    #[test]
    fn test_no_effects_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        PixelGrid::filled(2, 2, Colour::WHITE)
            .into_image()
            .save(&input)
            .unwrap();

        run(args(input, output.clone(), EffectArgs::default()), &Printer::new()).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_applies_opacity_threshold() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        PixelGrid::from_rows(&[vec![
            Colour::new(100, 150, 200, 200),
            Colour::new(100, 150, 200, 64),
        ]])
        .into_image()
        .save(&input)
        .unwrap();

        let effects = EffectArgs {
            remove_partial_transparency: true,
            opacity_threshold: 128,
            ..Default::default()
        };
        run(args(input, output.clone(), effects), &Printer::new()).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [200, 200, 200, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [100, 150, 200, 64]);
    }

    #[test]
    fn test_invalid_outline_fails_before_reading_input() {
        let dir = tempdir().unwrap();
        let effects = EffectArgs {
            outline: Some("14px #zzzzzz".to_string()),
            ..Default::default()
        };

        let err = run(
            args(dir.path().join("missing.png"), dir.path().join("out.png"), effects),
            &Printer::new(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            crate::error::IconError::InvalidOutlineSpec { .. }
        ));
    }
}
