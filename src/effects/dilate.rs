//! Morphological dilation of binary masks.
//!
//! Output cell `(x, y)` is set when any set kernel cell, centred on
//! `(x, y)`, lands on a set mask cell. Kernel cells that fall outside the
//! mask read as unset; the mask never grows or wraps.
//!
//! Because every kernel row is a contiguous run, each row test reduces to
//! a range query over a per-row prefix count. That keeps the cost at
//! `area × (2r+1)` instead of `area × (2r+1)²` with bit-identical output.

use rayon::prelude::*;

use crate::types::BinaryMask;

use super::StructuringElement;

/// Dilate `mask` with `kernel`, returning a mask of the same dimensions.
pub fn dilate(mask: &BinaryMask, kernel: &StructuringElement) -> BinaryMask {
    let width = mask.width() as usize;
    let height = mask.height() as usize;

    if kernel.is_identity() || width == 0 || height == 0 || mask.is_empty() {
        return mask.clone();
    }

    let spans = kernel.row_spans();

    // prefix[y][i] = number of set cells in row y before column i
    let prefix: Vec<Vec<u32>> = mask
        .cells()
        .par_chunks(width)
        .map(|row| {
            let mut counts = Vec::with_capacity(width + 1);
            let mut acc = 0u32;
            counts.push(acc);
            for &cell in row {
                acc += u32::from(cell);
                counts.push(acc);
            }
            counts
        })
        .collect();

    let mut output = BinaryMask::new(mask.width(), mask.height());
    output
        .cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = spans.iter().any(|&(dy, reach)| {
                    let sy = y as i64 + dy;
                    if sy < 0 || sy >= height as i64 {
                        return false;
                    }
                    let lo = (x as i64 - reach).max(0) as usize;
                    let hi = (x as i64 + reach).min(width as i64 - 1) as usize;
                    let counts = &prefix[sy as usize];
                    counts[hi + 1] > counts[lo]
                });
            }
        });

    output
}
