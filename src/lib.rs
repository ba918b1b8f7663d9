//! iconfx - Icon effect processor
//!
//! A library for post-processing game UI icons: transparent padding,
//! opacity flattening, brightness remapping and circular outlines, applied
//! in a fixed order so results are reproducible.

pub mod cli;
pub mod codec;
pub mod discovery;
pub mod effects;
pub mod error;
pub mod output;
pub mod types;

pub use codec::{read_png, write_png};
pub use discovery::{discover, DiscoveryResult, EffectsConfig, IconFile, Manifest};
pub use effects::{
    add_outline, add_padding, adjust_brightness, apply, dilate, normalize_alpha, process_file,
    StructuringElement,
};
pub use error::{IconError, Result};
pub use types::{
    BinaryMask, Brightness, Colour, EffectRequest, OpacityThreshold, OutlineSpec, PixelGrid,
};
