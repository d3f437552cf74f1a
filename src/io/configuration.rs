//! Generation constants and runtime configuration defaults

// Canvas defaults used when settings are sampled from an extracted palette
/// Canvas width when none is given
pub const DEFAULT_CANVAS_WIDTH: u32 = 1000;
/// Canvas height when none is given
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;
/// Maximum extra copies `weight` may append to the color table
pub const MAX_COLOR_WEIGHT: i64 = 10_000;

// Sampling ranges are half-open: the upper bound is never drawn
/// Lower bound for sampled rectangle sizes and distance factors
pub const SAMPLE_RANGE_MIN: i64 = 2;
/// Upper bound for sampled rectangle sizes
pub const SAMPLE_RANGE_MAX: i64 = 40;
/// Upper bound for the single sampled jitter value
pub const DEFAULT_JITTER_MAX: i64 = 100;

// Output settings
/// Output filename when none is given
pub const DEFAULT_OUTPUT: &str = "image.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
