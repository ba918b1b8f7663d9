//! Boolean coverage masks derived from a grid's alpha channel.

use std::fmt;

use super::PixelGrid;

/// A width×height grid of booleans, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-false mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a mask from raw row-major cells.
    ///
    /// Returns `None` if `cells` does not hold exactly `width * height` values.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// Cover every pixel whose alpha is nonzero.
    pub fn from_alpha(grid: &PixelGrid) -> Self {
        let cells = grid.as_image().pixels().map(|p| p.0[3] > 0).collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read a cell. Out-of-bounds coordinates read as `false`.
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Write a cell. Panics when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(x < self.width && y < self.height, "mask index out of bounds");
        self.cells[y as usize * self.width as usize + x as usize] = value;
    }

    /// Cells set in `self` but not in `other`. Both masks must share dimensions.
    pub fn and_not(&self, other: &BinaryMask) -> BinaryMask {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| a && !b)
            .collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// True when every set cell of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &BinaryMask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells.iter().zip(&other.cells).all(|(&a, &b)| !a || b)
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl fmt::Display for BinaryMask {
    /// Renders set cells as `#` and clear cells as `.`, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width as usize;
        if width == 0 {
            return Ok(());
        }
        for (i, row) in self.cells.chunks(width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
