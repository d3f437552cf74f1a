//! Bounded random perturbations for rectangle position and size

use crate::math::random::RandomSource;

/// Symmetric jitter bounds; each offset is drawn from `[-bound, bound)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JitterBounds {
    /// Horizontal position jitter
    pub x: u32,
    /// Vertical position jitter
    pub y: u32,
    /// Width jitter
    pub width: u32,
    /// Height jitter (ignored when squares are preserved)
    pub height: u32,
}

impl JitterBounds {
    /// Bounds that leave every rectangle exactly on its grid point
    pub const NONE: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };
}

/// Offsets sampled for a single rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectJitter {
    /// Center offset along x
    pub dx: i64,
    /// Center offset along y
    pub dy: i64,
    /// Width delta
    pub dw: i64,
    /// Height delta
    pub dh: i64,
}

/// Draw one offset from `[-bound, bound)`; a zero bound always yields 0
pub fn symmetric(rng: &mut RandomSource, bound: u32) -> i64 {
    let bound = i64::from(bound);
    rng.range(-bound, bound)
}

impl RectJitter {
    /// Sample independent offsets for one rectangle
    ///
    /// Draw order is x, y, width, height. With `preserve_square` the height
    /// delta mirrors the width delta and no height draw is made.
    pub fn sample(rng: &mut RandomSource, bounds: &JitterBounds, preserve_square: bool) -> Self {
        let dx = symmetric(rng, bounds.x);
        let dy = symmetric(rng, bounds.y);
        let dw = symmetric(rng, bounds.width);
        let dh = if preserve_square {
            dw
        } else {
            symmetric(rng, bounds.height)
        };

        Self { dx, dy, dw, dh }
    }
}
