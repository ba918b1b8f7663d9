//! Effect parameters for a single pipeline run.
//!
//! ## Types
//!
//! - [`Brightness`] - Brightness delta (-100 to 100, 0 = unchanged). Clamped on construction.
//! - [`OpacityThreshold`] - Minimum alpha a pixel needs before it is flattened (0-255).
//! - [`EffectRequest`] - Which effects to run and with what parameters.

use super::OutlineSpec;

/// Brightness adjustment (-100 to 100).
///
/// -100 drives colour channels to black, 100 doubles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Brightness(i32);

impl Brightness {
    pub fn new(value: i64) -> Self {
        Self(value.clamp(-100, 100) as i32)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Linear scale factor applied to colour channels, in `[0, 2]`.
    pub fn factor(self) -> f64 {
        1.0 + f64::from(self.0) / 100.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 0
    }
}

/// Alpha threshold for opacity flattening (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpacityThreshold(u8);

impl OpacityThreshold {
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 255) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// The set of effects to apply to one image.
///
/// Effects always run in the order padding, opacity flattening,
/// brightness, outline regardless of how the request was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectRequest {
    pub padding: Option<u32>,
    pub remove_transparency: bool,
    pub opacity_threshold: OpacityThreshold,
    pub brightness: Option<Brightness>,
    pub outline: Option<OutlineSpec>,
}

impl EffectRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_remove_transparency(mut self, threshold: OpacityThreshold) -> Self {
        self.remove_transparency = true;
        self.opacity_threshold = threshold;
        self
    }

    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_outline(mut self, outline: OutlineSpec) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Padding to apply, if the padding stage runs.
    pub fn active_padding(&self) -> Option<u32> {
        self.padding.filter(|&p| p > 0)
    }

    /// Brightness to apply, if the brightness stage runs.
    pub fn active_brightness(&self) -> Option<Brightness> {
        self.brightness.filter(|b| !b.is_identity())
    }

    /// True when no effect was asked for at all.
    ///
    /// A request with `padding: Some(0)` is not empty even though the stage
    /// will be skipped; the caller explicitly asked for it.
    pub fn is_empty(&self) -> bool {
        self.padding.is_none()
            && !self.remove_transparency
            && self.brightness.is_none()
            && self.outline.is_none()
    }

    /// Human-readable labels for the stages that will run, in pipeline order.
    pub fn summary(&self) -> Vec<String> {
        let mut applied = Vec::new();

        if let Some(padding) = self.active_padding() {
            applied.push(format!("padding={}px", padding));
        }

        if self.remove_transparency {
            let threshold = self.opacity_threshold.value();
            if threshold > 0 {
                applied.push(format!(
                    "remove-partial-transparency(threshold={})",
                    threshold
                ));
            } else {
                applied.push("remove-partial-transparency".to_string());
            }
        }

        if let Some(brightness) = self.active_brightness() {
            applied.push(format!("brightness={}", brightness.value()));
        }

        if let Some(outline) = &self.outline {
            applied.push(format!("outline={}px", outline.width_px));
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    #[test]
    fn brightness_clamps_to_valid_range() {
        assert_eq!(Brightness::new(-250).value(), -100);
        assert_eq!(Brightness::new(42).value(), 42);
        assert_eq!(Brightness::new(101).value(), 100);
    }

    #[test]
    fn brightness_factor_is_linear() {
        assert_eq!(Brightness::new(-100).factor(), 0.0);
        assert_eq!(Brightness::new(0).factor(), 1.0);
        assert_eq!(Brightness::new(50).factor(), 1.5);
        assert_eq!(Brightness::new(100).factor(), 2.0);
    }

    #[test]
    fn threshold_clamps_to_valid_range() {
        assert_eq!(OpacityThreshold::new(-5).value(), 0);
        assert_eq!(OpacityThreshold::new(128).value(), 128);
        assert_eq!(OpacityThreshold::new(999).value(), 255);
    }

    #[test]
    fn empty_request() {
        let request = EffectRequest::new();
        assert!(request.is_empty());
        assert!(request.summary().is_empty());
    }

    #[test]
    fn zero_padding_and_brightness_are_skipped_but_not_empty() {
        let request = EffectRequest::new()
            .with_padding(0)
            .with_brightness(Brightness::new(0));

        assert!(!request.is_empty());
        assert_eq!(request.active_padding(), None);
        assert_eq!(request.active_brightness(), None);
        assert!(request.summary().is_empty());
    }

    #[test]
    fn summary_follows_pipeline_order() {
        let request = EffectRequest::new()
            .with_outline(OutlineSpec::new(10, Colour::WHITE))
            .with_brightness(Brightness::new(-20))
            .with_remove_transparency(OpacityThreshold::new(128))
            .with_padding(10);

        assert_eq!(
            request.summary(),
            vec![
                "padding=10px",
                "remove-partial-transparency(threshold=128)",
                "brightness=-20",
                "outline=10px",
            ]
        );
    }

    #[test]
    fn summary_without_threshold() {
        let request = EffectRequest::new().with_remove_transparency(OpacityThreshold::default());
        assert_eq!(request.summary(), vec!["remove-partial-transparency"]);
    }
}
