//! Icon effects.
//!
//! | Effect | Function |
//! |---|---|
//! | Disk kernel | [`StructuringElement::build`] |
//! | Dilation | [`dilate`] |
//! | Opacity flattening | [`normalize_alpha`] |
//! | Brightness | [`adjust_brightness`] |
//! | Padding | [`add_padding`] |
//! | Outline | [`add_outline`] |
//! | Everything, in order | [`apply`] / [`process_file`] |

mod alpha;
mod brightness;
mod dilate;
mod kernel;
mod outline;
mod padding;
mod pipeline;

pub use alpha::normalize_alpha;
pub use brightness::adjust_brightness;
pub use dilate::dilate;
pub use kernel::StructuringElement;
pub use outline::{add_outline, outline_mask};
pub use padding::{add_padding, check_padding};
pub use pipeline::{apply, process_file, validate};
