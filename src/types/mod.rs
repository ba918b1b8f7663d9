//! Core domain types for iconfx.
//!
//! This module contains the value types every effect works with:
//! - `Colour` - RGBA colour values and colour-string parsing
//! - `PixelGrid` - The RGBA raster being transformed
//! - `BinaryMask` - Alpha coverage used by outline generation
//! - `OutlineSpec` - Outline width and colour
//! - `EffectRequest` - Which effects to run

mod colour;
mod grid;
mod mask;
mod outline;
mod request;

pub use colour::Colour;
pub use grid::PixelGrid;
pub use mask::BinaryMask;
pub use outline::OutlineSpec;
pub use request::{Brightness, EffectRequest, OpacityThreshold};
