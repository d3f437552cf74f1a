//! Axis-aligned rectangles in signed canvas coordinates

/// Rectangle given by its top-left corner and extent
///
/// Extents may be zero or negative after size jitter; such rectangles are
/// empty and cover no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub left: i64,
    /// Top edge (inclusive)
    pub top: i64,
    /// Horizontal extent
    pub width: i64,
    /// Vertical extent
    pub height: i64,
}

impl Rect {
    /// Rectangle of the given size centered on `(cx, cy)`
    ///
    /// Halving truncates, so odd extents sit one pixel toward the top-left.
    pub const fn centered(cx: i64, cy: i64, width: i64, height: i64) -> Self {
        Self {
            left: cx - width / 2,
            top: cy - height / 2,
            width,
            height,
        }
    }

    /// Check whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i64 {
        self.left + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Intersection with `[0, width) × [0, height)`
    ///
    /// Returns an empty rectangle when the two do not overlap.
    pub fn clip(&self, width: u32, height: u32) -> Self {
        if self.is_empty() {
            return Self {
                width: 0,
                height: 0,
                ..*self
            };
        }

        let left = self.left.max(0);
        let top = self.top.max(0);
        let right = self.right().min(i64::from(width));
        let bottom = self.bottom().min(i64::from(height));

        Self {
            left,
            top,
            width: (right - left).max(0),
            height: (bottom - top).max(0),
        }
    }
}
