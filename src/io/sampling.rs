//! Randomized placement settings built around an extracted palette
//!
//! Used when no config file is given. Every unspecified parameter is
//! sampled from fixed half-open ranges, and exactly one of the four jitter
//! bounds is switched on.

use crate::algorithm::placement::PlacementConfig;
use crate::color::ColorTable;
use crate::io::config_file::{CanvasOverrides, canvas_dimension};
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_JITTER_MAX, SAMPLE_RANGE_MAX,
    SAMPLE_RANGE_MIN,
};
use crate::io::error::Result;
use crate::math::jitter::JitterBounds;
use crate::math::random::RandomSource;
use tracing::debug;

/// Which jitter bound a sampled configuration enables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterAxis {
    /// Width jitter
    Width,
    /// Height jitter
    Height,
    /// Horizontal position jitter
    X,
    /// Vertical position jitter
    Y,
}

impl JitterAxis {
    const ALL: [Self; 4] = [Self::Width, Self::Height, Self::X, Self::Y];

    /// Pick one axis uniformly
    pub fn sample(rng: &mut RandomSource) -> Self {
        let index = rng.index(Self::ALL.len());
        Self::ALL.get(index).copied().unwrap_or(Self::Width)
    }

    /// Bounds with only this axis set to `amount`
    pub const fn bounds(self, amount: u32) -> JitterBounds {
        let mut bounds = JitterBounds::NONE;
        match self {
            Self::Width => bounds.width = amount,
            Self::Height => bounds.height = amount,
            Self::X => bounds.x = amount,
            Self::Y => bounds.y = amount,
        }
        bounds
    }
}

/// Build placement settings from a palette and optional overrides
///
/// Random draws happen in a fixed order: canvas color, x factor, y factor,
/// rectangle width, rectangle height, jitter axis, jitter amount. Factors
/// given in `overrides` skip their draw.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero or oversized dimension override,
/// or `DivisionByZeroDistFactor` when a factor exceeds its canvas extent
pub fn sampled_config(
    colors: ColorTable,
    overrides: &CanvasOverrides,
    rng: &mut RandomSource,
) -> Result<PlacementConfig> {
    let canvas_color = colors.draw(rng);

    let canvas_width = canvas_dimension(
        "width",
        i64::from(overrides.width.unwrap_or(DEFAULT_CANVAS_WIDTH)),
    )?;
    let canvas_height = canvas_dimension(
        "height",
        i64::from(overrides.height.unwrap_or(DEFAULT_CANVAS_HEIGHT)),
    )?;

    let x_factor = overrides
        .x_factor
        .unwrap_or_else(|| sample_u32(rng, SAMPLE_RANGE_MIN, SAMPLE_RANGE_MAX / 2));
    let y_factor = overrides
        .y_factor
        .unwrap_or_else(|| sample_u32(rng, SAMPLE_RANGE_MIN, SAMPLE_RANGE_MAX / 2));

    let rect_width = sample_u32(rng, SAMPLE_RANGE_MIN, SAMPLE_RANGE_MAX);
    let rect_height = sample_u32(rng, SAMPLE_RANGE_MIN, SAMPLE_RANGE_MAX);

    let axis = JitterAxis::sample(rng);
    let amount = sample_u32(rng, 0, DEFAULT_JITTER_MAX);

    debug!(
        x_factor,
        y_factor,
        rect_width,
        rect_height,
        ?axis,
        amount,
        "sampled placement settings"
    );

    Ok(PlacementConfig {
        rect_colors: colors,
        canvas_color,
        canvas_width,
        canvas_height,
        dist_x: PlacementConfig::spacing_from_factor("x", canvas_width, x_factor)?,
        dist_y: PlacementConfig::spacing_from_factor("y", canvas_height, y_factor)?,
        rect_width,
        rect_height,
        jitter: axis.bounds(amount),
        preserve_square: false,
        from_src_image: false,
    })
}

// Both bounds are small non-negative constants
fn sample_u32(rng: &mut RandomSource, min: i64, max: i64) -> u32 {
    u32::try_from(rng.range(min, max)).unwrap_or(0)
}
