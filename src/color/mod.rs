//! Colors, color tables and palette extraction

/// Palette extraction from text files
pub mod extraction;
/// RGBA color type and hex conversion
pub mod hex;
/// Weighted-by-repetition color table
pub mod table;

pub use hex::Color;
pub use table::ColorTable;
