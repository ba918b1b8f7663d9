//! PNG input and output.
//!
//! Decoding accepts anything the `image` crate can read and converts it to
//! RGBA. Encoding always produces an RGBA PNG, built in memory so a failed
//! encode never leaves a partial file behind.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{IconError, Result};
use crate::types::PixelGrid;

/// Read an image file and convert it to an RGBA grid.
pub fn read_png(path: &Path) -> Result<PixelGrid> {
    let bytes = fs::read(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    decode_png(&bytes, path)
}

/// Decode image bytes. `path` is only used for error messages.
pub fn decode_png(bytes: &[u8], path: &Path) -> Result<PixelGrid> {
    let image = image::load_from_memory(bytes).map_err(|e| IconError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(PixelGrid::from(image.to_rgba8()))
}

/// Encode a grid as PNG bytes. `path` is only used for error messages.
pub fn encode_png(grid: &PixelGrid, path: &Path) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    grid.as_image()
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| IconError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Write encoded bytes to `path`, creating parent directories as needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IconError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, bytes).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Encode and write a grid as a PNG file.
pub fn write_png(grid: &PixelGrid, path: &Path) -> Result<()> {
    let bytes = encode_png(grid, path)?;
    write_bytes(path, &bytes)
}
