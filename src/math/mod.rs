//! Randomness utilities for placement

/// Bounded position and size jitter
pub mod jitter;
/// Seedable random source with half-open range sampling
pub mod random;
