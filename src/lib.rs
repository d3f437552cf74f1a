//! Procedural raster art from jittered, colored rectangles on a regular grid
//!
//! A canvas (solid color or an existing image) is walked on a fixed grid;
//! at each grid point a rectangle with randomly perturbed position and size
//! is painted in a color drawn from a weighted table. Over an image, cells
//! whose center already shows the drawn color are left alone.

#![forbid(unsafe_code)]

/// Rectangle placement and compositing
pub mod algorithm;
/// Colors, weighted color tables and palette extraction
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Random source and jitter sampling
pub mod math;
/// Canvas and rectangle geometry
pub mod spatial;

pub use io::error::{GenerationError, Result};
