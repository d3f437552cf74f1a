use crate::color::hex::Color;
use crate::spatial::{Canvas, Rect};

/// Fill `rect` with `color` at full opacity
///
/// Pixels outside the canvas are skipped. Returns the number of pixels written.
pub fn fill_rect(canvas: &mut Canvas, rect: &Rect, color: Color) -> u64 {
    let visible = rect.clip(canvas.width(), canvas.height());
    if visible.is_empty() {
        return 0;
    }

    for x in visible.left..visible.right() {
        for y in visible.top..visible.bottom() {
            canvas.set(x, y, color);
        }
    }

    (visible.width * visible.height) as u64
}
