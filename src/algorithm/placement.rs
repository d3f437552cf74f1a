//! Grid traversal and jittered rectangle placement
//!
//! Candidate cells are the grid points `(x, y)` with `1 <= x < width`,
//! `1 <= y < height` and both coordinates multiples of the grid spacing.
//! The origin row and column are never candidates. Cells are visited with
//! x outer and y inner, so later rectangles cover earlier ones.

use crate::algorithm::compositor::fill_rect;
use crate::color::{Color, ColorTable};
use crate::io::error::{GenerationError, Result};
use crate::math::jitter::{JitterBounds, RectJitter};
use crate::math::random::RandomSource;
use crate::spatial::{Canvas, Rect};
use std::iter::StepBy;
use std::num::NonZeroU32;
use std::ops::Range;
use tracing::debug;

/// Fully validated placement parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Colors rectangles are drawn from
    pub rect_colors: ColorTable,
    /// Solid background when the canvas is not image-backed
    pub canvas_color: Color,
    /// Extent of the candidate grid along x
    pub canvas_width: u32,
    /// Extent of the candidate grid along y
    pub canvas_height: u32,
    /// Horizontal grid spacing
    pub dist_x: NonZeroU32,
    /// Vertical grid spacing
    pub dist_y: NonZeroU32,
    /// Base rectangle width before jitter
    pub rect_width: u32,
    /// Base rectangle height before jitter
    pub rect_height: u32,
    /// Position and size jitter bounds
    pub jitter: JitterBounds,
    /// Mirror width jitter onto height so rectangles stay square
    pub preserve_square: bool,
    /// Skip rectangles whose color already sits under their center
    pub from_src_image: bool,
}

impl PlacementConfig {
    /// Derive grid spacing as `extent / factor`
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZeroDistFactor` if `factor` is zero or larger
    /// than `extent` (both would leave the spacing at zero)
    pub fn spacing_from_factor(
        axis: &'static str,
        extent: u32,
        factor: u32,
    ) -> Result<NonZeroU32> {
        extent
            .checked_div(factor)
            .and_then(NonZeroU32::new)
            .ok_or(GenerationError::DivisionByZeroDistFactor {
                axis,
                extent,
                factor,
            })
    }

    /// Switch to an image-backed canvas of the given size
    ///
    /// Spacing is kept, so the distance factors reported afterwards are
    /// recomputed from the new extent and can differ from the configured ones.
    pub const fn use_image_extent(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.from_src_image = true;
    }

    /// Horizontal distance factor implied by the current width and spacing
    pub const fn x_dist_factor(&self) -> u32 {
        self.canvas_width / self.dist_x.get()
    }

    /// Vertical distance factor implied by the current height and spacing
    pub const fn y_dist_factor(&self) -> u32 {
        self.canvas_height / self.dist_y.get()
    }
}

/// Counts describing one placement pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    /// Candidate cells visited
    pub candidates: usize,
    /// Rectangles drawn
    pub drawn: usize,
    /// Rectangles skipped because their color was already present
    pub skipped: usize,
    /// Pixels written across all drawn rectangles
    pub pixels: u64,
}

/// Walks the candidate grid and paints one jittered rectangle per cell
pub struct RectanglePlacer<'a> {
    config: &'a PlacementConfig,
}

impl<'a> RectanglePlacer<'a> {
    /// Create a placer over a validated configuration
    pub const fn new(config: &'a PlacementConfig) -> Self {
        Self { config }
    }

    /// Candidate x coordinates in visiting order
    pub fn columns(&self) -> StepBy<Range<u32>> {
        grid_axis(self.config.canvas_width, self.config.dist_x)
    }

    /// Candidate y coordinates in visiting order
    pub fn rows(&self) -> StepBy<Range<u32>> {
        grid_axis(self.config.canvas_height, self.config.dist_y)
    }

    /// All candidate cells, x outer and y inner
    pub fn candidates(&self) -> impl Iterator<Item = (u32, u32)> {
        self.columns().flat_map(move |x| self.rows().map(move |y| (x, y)))
    }

    /// Paint every candidate cell onto `canvas`
    pub fn place(&self, canvas: &mut Canvas, rng: &mut RandomSource) -> PlacementSummary {
        self.place_with_progress(canvas, rng, |_| {})
    }

    /// Paint every candidate cell, reporting each finished column index
    ///
    /// Never fails: rectangles that jitter off the canvas or shrink to a
    /// non-positive size simply draw fewer or no pixels.
    pub fn place_with_progress(
        &self,
        canvas: &mut Canvas,
        rng: &mut RandomSource,
        mut on_column: impl FnMut(usize),
    ) -> PlacementSummary {
        let mut summary = PlacementSummary::default();

        for (column, x) in self.columns().enumerate() {
            for y in self.rows() {
                summary.candidates += 1;
                match self.place_one(canvas, rng, x, y) {
                    Some(pixels) => {
                        summary.drawn += 1;
                        summary.pixels += pixels;
                    }
                    None => summary.skipped += 1,
                }
            }
            on_column(column);
        }

        debug!(
            candidates = summary.candidates,
            drawn = summary.drawn,
            skipped = summary.skipped,
            pixels = summary.pixels,
            "placement finished"
        );
        summary
    }

    // Returns the pixels written, or None if the occlusion check skipped the cell
    fn place_one(
        &self,
        canvas: &mut Canvas,
        rng: &mut RandomSource,
        x: u32,
        y: u32,
    ) -> Option<u64> {
        let config = self.config;
        let jitter = RectJitter::sample(rng, &config.jitter, config.preserve_square);

        let cx = i64::from(x) + jitter.dx;
        let cy = i64::from(y) + jitter.dy;
        let rect = Rect::centered(
            cx,
            cy,
            i64::from(config.rect_width) + jitter.dw,
            i64::from(config.rect_height) + jitter.dh,
        );

        let color = config.rect_colors.draw(rng);
        if config.from_src_image && canvas.get(cx, cy) == Some(color) {
            return None;
        }

        Some(fill_rect(canvas, &rect, color))
    }
}

// Multiples of `spacing` in [1, extent), same set as `v % spacing == 0` over 1..extent
fn grid_axis(extent: u32, spacing: NonZeroU32) -> StepBy<Range<u32>> {
    let step = spacing.get();
    (step..extent).step_by(step as usize)
}
