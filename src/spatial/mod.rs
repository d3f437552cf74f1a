//! Spatial data structures for painting
//!
//! This module contains:
//! - The pixel canvas with tolerant out-of-bounds access
//! - Rectangle geometry and clipping

/// Pixel canvas
pub mod canvas;
/// Rectangle geometry
pub mod rect;

pub use canvas::Canvas;
pub use rect::Rect;
