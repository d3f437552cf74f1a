/// Rectangle fill onto the canvas
pub mod compositor;
/// Candidate grid traversal, jitter and occlusion-skip placement
pub mod placement;
