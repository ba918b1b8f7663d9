//! RGBA pixel grid shared by every effect stage.

use image::{Rgba, RgbaImage};

use super::Colour;

/// A fixed-size RGBA raster.
///
/// Dimensions never change after creation. Effects that alter geometry
/// build a fresh grid instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    image: RgbaImage,
}

impl PixelGrid {
    /// Create a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a grid filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(colour.to_rgba())),
        }
    }

    /// Build a grid from rows of colours. Rows must all have the same length.
    pub fn from_rows(rows: &[Vec<Colour>]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &colour) in row.iter().enumerate() {
                grid.set(x as u32, y as u32, colour);
            }
        }
        grid
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read the pixel at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Colour {
        Colour::from_rgba(self.image.get_pixel(x, y).0)
    }

    /// Write the pixel at `(x, y)`. Panics when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        self.image.put_pixel(x, y, Rgba(colour.to_rgba()));
    }

    /// Iterate over every pixel mutably, in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgba<u8>> {
        self.image.pixels_mut()
    }

    /// Iterate over every pixel with its coordinates, in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (u32, u32, Colour)> + '_ {
        self.image
            .enumerate_pixels()
            .map(|(x, y, p)| (x, y, Colour::from_rgba(p.0)))
    }

    /// Borrow the underlying image buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the grid, returning the underlying image buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}
