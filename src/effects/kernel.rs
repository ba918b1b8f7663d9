//! Circular structuring element for morphological operations.

use std::fmt;

/// A `(2r+1)×(2r+1)` disk-shaped kernel.
///
/// Cell `(x, y)` is set iff its Euclidean distance from the centre `(r, r)`
/// is at most `r`. Radius 0 is the single-cell identity kernel.
///
/// Every row of a disk is one contiguous run centred on the vertical axis,
/// so only each row's horizontal reach is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    radius: u32,
    reach: Vec<u32>,
}

impl StructuringElement {
    /// Build the disk kernel of the given radius.
    ///
    /// Memory grows linearly with `radius`. Callers dilating a bounded
    /// mask should cap the radius with [`StructuringElement::saturating_radius`].
    pub fn build(radius: u32) -> Self {
        let r = u64::from(radius);
        let r_squared = r * r;

        // sqrt(dx^2 + dy^2) <= r  <=>  dx^2 <= r^2 - dy^2
        let reach = (0..=2 * r)
            .map(|y| {
                let dy = y.abs_diff(r);
                isqrt(r_squared - dy * dy) as u32
            })
            .collect();

        Self { radius, reach }
    }

    /// Clamp `radius` to `width + height`.
    ///
    /// No two cells of a `width`×`height` mask are `width + height` apart,
    /// so dilating with the clamped radius gives the same mask.
    pub fn saturating_radius(radius: u32, width: u32, height: u32) -> u32 {
        radius.min(width.saturating_add(height))
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Side length, always `2 * radius + 1`.
    pub fn side(&self) -> usize {
        self.radius as usize * 2 + 1
    }

    /// Whether cell `(x, y)` is set, with `(0, 0)` at the top-left corner.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        let r = self.radius as usize;
        match self.reach.get(y) {
            Some(&reach) => x < self.side() && x.abs_diff(r) <= reach as usize,
            None => false,
        }
    }

    /// Offsets `(dx, dy)` of all set cells relative to the centre.
    pub fn offsets(&self) -> Vec<(i64, i64)> {
        self.row_spans()
            .into_iter()
            .flat_map(|(dy, reach)| (-reach..=reach).map(move |dx| (dx, dy)))
            .collect()
    }

    /// Per-row horizontal reach as `(dy, half_width)` pairs.
    ///
    /// Row `dy` covers offsets `-half_width..=half_width`.
    pub fn row_spans(&self) -> Vec<(i64, i64)> {
        let r = i64::from(self.radius);
        self.reach
            .iter()
            .enumerate()
            .map(|(y, &reach)| (y as i64 - r, i64::from(reach)))
            .collect()
    }

    /// True for the radius-0 kernel, which leaves masks unchanged.
    pub fn is_identity(&self) -> bool {
        self.radius == 0
    }
}

/// Integer square root: the largest `x` with `x * x <= n`.
fn isqrt(n: u64) -> u64 {
    let mut x = (n as f64).sqrt() as u64;
    while u128::from(x) * u128::from(x) > u128::from(n) {
        x -= 1;
    }
    while u128::from(x + 1) * u128::from(x + 1) <= u128::from(n) {
        x += 1;
    }
    x
}

impl fmt::Display for StructuringElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side();
        for y in 0..side {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..side {
                f.write_str(if self.contains(x, y) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
